use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use super::athlete::AthleteRepository;
use super::category::CategoryRepository;
use super::training_center::TrainingCenterRepository;
use crate::error::Result;
use crate::models::{
    Athlete, AthleteRecord, Category, NewCategory, NewTrainingCenter, TrainingCenter,
};
use crate::query::AthleteFilter;
use crate::store::Session;

/// Postgres transaction driving the repositories.
///
/// sqlx rolls the transaction back when it is dropped uncommitted.
pub struct PgSession {
    tx: Transaction<'static, Postgres>,
}

impl PgSession {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Session for PgSession {
    async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<()> {
        self.tx.rollback().await?;
        Ok(())
    }

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        CategoryRepository::new(&mut self.tx).find_by_name(name).await
    }

    async fn find_training_center_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<TrainingCenter>> {
        TrainingCenterRepository::new(&mut self.tx)
            .find_by_name(name)
            .await
    }

    async fn insert_category(&mut self, category: &NewCategory) -> Result<Category> {
        CategoryRepository::new(&mut self.tx).create(category).await
    }

    async fn insert_training_center(
        &mut self,
        training_center: &NewTrainingCenter,
    ) -> Result<TrainingCenter> {
        TrainingCenterRepository::new(&mut self.tx)
            .create(training_center)
            .await
    }

    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()> {
        AthleteRepository::new(&mut self.tx).create(athlete).await
    }

    async fn find_athlete(&mut self, filter: &AthleteFilter) -> Result<Option<AthleteRecord>> {
        AthleteRepository::new(&mut self.tx).find(filter).await
    }

    async fn list_athletes(&mut self) -> Result<Vec<AthleteRecord>> {
        AthleteRepository::new(&mut self.tx).list().await
    }

    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<bool> {
        AthleteRepository::new(&mut self.tx).update(athlete).await
    }

    async fn delete_athlete(&mut self, id: Uuid) -> Result<bool> {
        AthleteRepository::new(&mut self.tx).delete(id).await
    }
}
