use sqlx::PgConnection;

use crate::error::{Result, StorageError};
use crate::models::{NewTrainingCenter, TrainingCenter};

pub struct TrainingCenterRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_name(&mut self, name: &str) -> Result<Option<TrainingCenter>> {
        let training_center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT training_center_id, name, address, owner
            FROM training_centers
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(training_center)
    }

    pub async fn create(&mut self, req: &NewTrainingCenter) -> Result<TrainingCenter> {
        let training_center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO training_centers (name, address, owner)
            VALUES ($1, $2, $3)
            RETURNING training_center_id, name, address, owner
            "#,
        )
        .bind(&req.name)
        .bind(&req.address)
        .bind(&req.owner)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(format!(
                        "Training center '{}' already exists",
                        req.name
                    ));
                }
            }
            StorageError::from(e)
        })?;

        Ok(training_center)
    }
}
