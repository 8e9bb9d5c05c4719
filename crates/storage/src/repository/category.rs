use sqlx::PgConnection;

use crate::error::{Result, StorageError};
use crate::models::{Category, NewCategory};

pub struct CategoryRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT category_id, name FROM categories WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(category)
    }

    pub async fn create(&mut self, req: &NewCategory) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING category_id, name",
        )
        .bind(&req.name)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(format!(
                        "Category '{}' already exists",
                        req.name
                    ));
                }
            }
            StorageError::from(e)
        })?;

        Ok(category)
    }
}
