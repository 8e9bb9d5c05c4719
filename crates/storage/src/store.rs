use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    Athlete, AthleteRecord, Category, NewCategory, NewTrainingCenter, TrainingCenter,
};
use crate::query::AthleteFilter;

/// A backend that hands out transactional sessions.
#[async_trait]
pub trait Store: Clone + Send + Sync + 'static {
    type Session: Session;

    /// Open a new session. It must be committed for its writes to persist.
    async fn begin(&self) -> Result<Self::Session>;
}

/// Transactional handle over the entity store.
///
/// Dropping a session without calling [`Session::commit`] discards every
/// write made through it.
#[async_trait]
pub trait Session: Send {
    async fn commit(self) -> Result<()>;

    async fn rollback(self) -> Result<()>;

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>>;

    async fn find_training_center_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<TrainingCenter>>;

    async fn insert_category(&mut self, category: &NewCategory) -> Result<Category>;

    async fn insert_training_center(
        &mut self,
        training_center: &NewTrainingCenter,
    ) -> Result<TrainingCenter>;

    /// Insert an athlete. A taken national id yields `StorageError::DuplicateKey`.
    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()>;

    /// First athlete matching `filter`, oldest first.
    async fn find_athlete(&mut self, filter: &AthleteFilter) -> Result<Option<AthleteRecord>>;

    async fn list_athletes(&mut self) -> Result<Vec<AthleteRecord>>;

    /// Overwrite the mutable columns of an athlete. Returns false if it does not exist.
    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<bool>;

    /// Returns false if the athlete does not exist.
    async fn delete_athlete(&mut self, id: Uuid) -> Result<bool>;
}
