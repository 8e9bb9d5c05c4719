use crate::error::{ReferenceKind, Result, StorageError};
use crate::models::{Category, TrainingCenter};
use crate::store::Session;

/// Look up a category by its exact name.
pub async fn resolve_category<S: Session>(session: &mut S, name: &str) -> Result<Category> {
    session
        .find_category_by_name(name)
        .await?
        .ok_or_else(|| StorageError::ReferenceNotFound {
            kind: ReferenceKind::Category,
            name: name.to_string(),
        })
}

/// Look up a training center by its exact name.
pub async fn resolve_training_center<S: Session>(
    session: &mut S,
    name: &str,
) -> Result<TrainingCenter> {
    session
        .find_training_center_by_name(name)
        .await?
        .ok_or_else(|| StorageError::ReferenceNotFound {
            kind: ReferenceKind::TrainingCenter,
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::{NewCategory, NewTrainingCenter};
    use crate::store::Store;

    async fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();
        session
            .insert_category(&NewCategory {
                name: "Scale".to_string(),
            })
            .await
            .unwrap();
        session
            .insert_training_center(&NewTrainingCenter {
                name: "CT King".to_string(),
                address: "Rua A, 20, Centro, Aurora-CE".to_string(),
                owner: "Joana".to_string(),
            })
            .await
            .unwrap();
        session.commit().await.unwrap();
        store
    }

    #[tokio::test]
    async fn resolves_existing_names() {
        let store = seeded().await;
        let mut session = store.begin().await.unwrap();

        let category = resolve_category(&mut session, "Scale").await.unwrap();
        let training_center = resolve_training_center(&mut session, "CT King")
            .await
            .unwrap();

        assert_eq!(category.name, "Scale");
        assert_eq!(training_center.owner, "Joana");
    }

    #[tokio::test]
    async fn match_is_exact() {
        let store = seeded().await;
        let mut session = store.begin().await.unwrap();

        let err = resolve_category(&mut session, "scale").await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::ReferenceNotFound { kind: ReferenceKind::Category, ref name } if name == "scale"
        ));
    }

    #[tokio::test]
    async fn missing_training_center_is_typed() {
        let store = seeded().await;
        let mut session = store.begin().await.unwrap();

        let err = resolve_training_center(&mut session, "CT Queen")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::ReferenceNotFound {
                kind: ReferenceKind::TrainingCenter,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Training center 'CT Queen' not found");
    }
}
