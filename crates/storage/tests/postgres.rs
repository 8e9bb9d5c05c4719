// Integration tests require a real database
// Run with: DATABASE_URL=postgres://... cargo test -p storage -- --ignored

use storage::{
    Database, Session, Store,
    error::StorageError,
    models::{Athlete, NewCategory, NewTrainingCenter},
    query::AthleteFilter,
};
use uuid::Uuid;

async fn database() -> Database {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let db = Database::new(&url).await.expect("connection failed");
    db.run_migrations().await.expect("migrations failed");
    db
}

/// Seed a category and training center with unique names and return their ids
async fn seed(db: &Database) -> (i32, i32, String) {
    let suffix = Uuid::new_v4().simple().to_string();
    let mut session = db.begin().await.unwrap();
    let category = session
        .insert_category(&NewCategory {
            name: format!("c{}", &suffix[..8]),
        })
        .await
        .unwrap();
    let training_center = session
        .insert_training_center(&NewTrainingCenter {
            name: format!("ct{}", &suffix[..8]),
            address: "Rua A, 20, Centro, Aurora-CE".to_string(),
            owner: "Joana".to_string(),
        })
        .await
        .unwrap();
    session.commit().await.unwrap();
    (
        category.category_id,
        training_center.training_center_id,
        suffix[..11].to_string(),
    )
}

fn athlete(national_id: &str, category_id: i32, training_center_id: i32) -> Athlete {
    Athlete {
        athlete_id: Uuid::new_v4(),
        name: "Jonas".to_string(),
        national_id: national_id.to_string(),
        age: 28,
        weight: 68.5,
        height: 1.66,
        sex: "M".to_string(),
        category_id,
        training_center_id,
        created_at: chrono::Utc::now().naive_utc(),
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_national_id_rolls_back() {
    let db = database().await;
    let (category_id, training_center_id, national_id) = seed(&db).await;

    let mut session = db.begin().await.unwrap();
    session
        .insert_athlete(&athlete(&national_id, category_id, training_center_id))
        .await
        .unwrap();
    session.commit().await.unwrap();

    let mut session = db.begin().await.unwrap();
    let err = session
        .insert_athlete(&athlete(&national_id, category_id, training_center_id))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::DuplicateKey { .. }));
    drop(session);

    let mut session = db.begin().await.unwrap();
    let found = session
        .find_athlete(&AthleteFilter::NationalId(national_id.clone()))
        .await
        .unwrap()
        .expect("original athlete kept");
    assert_eq!(found.athlete.national_id, national_id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn uncommitted_insert_is_discarded() {
    let db = database().await;
    let (category_id, training_center_id, national_id) = seed(&db).await;
    let candidate = athlete(&national_id, category_id, training_center_id);

    {
        let mut session = db.begin().await.unwrap();
        session.insert_athlete(&candidate).await.unwrap();
    }

    let mut session = db.begin().await.unwrap();
    let found = session
        .find_athlete(&AthleteFilter::Id(candidate.athlete_id))
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn name_search_treats_wildcards_literally() {
    let db = database().await;
    let (category_id, training_center_id, national_id) = seed(&db).await;

    let mut session = db.begin().await.unwrap();
    session
        .insert_athlete(&athlete(&national_id, category_id, training_center_id))
        .await
        .unwrap();

    let hit = session
        .find_athlete(&AthleteFilter::NameContains("JON".to_string()))
        .await
        .unwrap();
    let miss = session
        .find_athlete(&AthleteFilter::NameContains("j%s".to_string()))
        .await
        .unwrap();

    assert!(hit.is_some());
    assert!(miss.is_none());
}
