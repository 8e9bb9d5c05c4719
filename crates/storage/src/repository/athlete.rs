use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteRecord};
use crate::query::{AthleteFilter, contains_pattern};

const SELECT_RECORD: &str = r#"
    SELECT a.athlete_id, a.name, a.national_id, a.age, a.weight, a.height, a.sex,
           a.category_id, a.training_center_id, a.created_at,
           c.name AS category_name,
           t.name AS training_center_name
    FROM athletes a
    JOIN categories c ON c.category_id = a.category_id
    JOIN training_centers t ON t.training_center_id = a.training_center_id
"#;

pub struct AthleteRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// List all athletes in insertion order
    pub async fn list(&mut self) -> Result<Vec<AthleteRecord>> {
        let sql = format!("{SELECT_RECORD} ORDER BY a.created_at, a.athlete_id");
        let athletes = sqlx::query_as::<_, AthleteRecord>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(athletes)
    }

    /// Find the first athlete matching `filter`
    pub async fn find(&mut self, filter: &AthleteFilter) -> Result<Option<AthleteRecord>> {
        let predicate = match filter {
            AthleteFilter::Id(_) => "a.athlete_id = $1",
            AthleteFilter::NationalId(_) => "a.national_id = $1",
            AthleteFilter::NameContains(_) => "a.name ILIKE $1",
        };
        let sql = format!(
            "{SELECT_RECORD} WHERE {predicate} ORDER BY a.created_at, a.athlete_id LIMIT 1"
        );

        let query = sqlx::query_as::<_, AthleteRecord>(&sql);
        let query = match filter {
            AthleteFilter::Id(id) => query.bind(*id),
            AthleteFilter::NationalId(national_id) => query.bind(national_id.as_str()),
            AthleteFilter::NameContains(name) => query.bind(contains_pattern(name)),
        };

        let athlete = query.fetch_optional(&mut *self.conn).await?;

        Ok(athlete)
    }

    /// Create a new athlete
    pub async fn create(&mut self, athlete: &Athlete) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO athletes (
                athlete_id, name, national_id, age, weight, height, sex,
                category_id, training_center_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(athlete.athlete_id)
        .bind(&athlete.name)
        .bind(&athlete.national_id)
        .bind(athlete.age)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(&athlete.sex)
        .bind(athlete.category_id)
        .bind(athlete.training_center_id)
        .bind(athlete.created_at)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| constraint_error(e, &athlete.national_id))?;

        Ok(())
    }

    /// Update the mutable columns of an existing athlete
    pub async fn update(&mut self, athlete: &Athlete) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE athletes
            SET name = $2,
                national_id = $3,
                age = $4,
                weight = $5,
                height = $6,
                sex = $7
            WHERE athlete_id = $1
            "#,
        )
        .bind(athlete.athlete_id)
        .bind(&athlete.name)
        .bind(&athlete.national_id)
        .bind(athlete.age)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(&athlete.sex)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| constraint_error(e, &athlete.national_id))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an athlete by ID
    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn constraint_error(e: sqlx::Error, national_id: &str) -> StorageError {
    let err = StorageError::from(e);
    if err.is_unique_violation() {
        tracing::debug!(%national_id, "Unique violation on athletes.national_id");
        StorageError::DuplicateKey {
            national_id: national_id.to_string(),
        }
    } else if err.is_foreign_key_violation() {
        StorageError::ConstraintViolation(
            "Referenced category or training center no longer exists".to_string(),
        )
    } else {
        err
    }
}
