//! In-process store with the same contract as the Postgres backend.
//!
//! A session holds the store lock until it ends, so sessions run one at a
//! time. Writes go straight to the shared state; a snapshot taken at `begin`
//! is restored unless the session commits.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{
    Athlete, AthleteRecord, Category, NewCategory, NewTrainingCenter, TrainingCenter,
};
use crate::query::AthleteFilter;
use crate::store::{Session, Store};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    categories: Vec<Category>,
    training_centers: Vec<TrainingCenter>,
    athletes: Vec<Athlete>,
    next_category_id: i32,
    next_training_center_id: i32,
}

impl MemoryState {
    fn record(&self, athlete: &Athlete) -> Option<AthleteRecord> {
        let category = self
            .categories
            .iter()
            .find(|c| c.category_id == athlete.category_id)?;
        let training_center = self
            .training_centers
            .iter()
            .find(|t| t.training_center_id == athlete.training_center_id)?;

        Some(AthleteRecord {
            athlete: athlete.clone(),
            category_name: category.name.clone(),
            training_center_name: training_center.name.clone(),
        })
    }

    fn national_id_taken(&self, national_id: &str, except: Option<Uuid>) -> bool {
        self.athletes
            .iter()
            .any(|a| a.national_id == national_id && Some(a.athlete_id) != except)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    type Session = MemorySession;

    async fn begin(&self) -> Result<MemorySession> {
        let guard = self.state.clone().lock_owned().await;
        let snapshot = guard.clone();
        Ok(MemorySession {
            state: guard,
            snapshot: Some(snapshot),
        })
    }
}

pub struct MemorySession {
    state: OwnedMutexGuard<MemoryState>,
    snapshot: Option<MemoryState>,
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.state = snapshot;
        }
    }
}

#[async_trait]
impl Session for MemorySession {
    async fn commit(mut self) -> Result<()> {
        self.snapshot = None;
        Ok(())
    }

    async fn rollback(self) -> Result<()> {
        // Drop restores the snapshot
        Ok(())
    }

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        Ok(self
            .state
            .categories
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn find_training_center_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<TrainingCenter>> {
        Ok(self
            .state
            .training_centers
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn insert_category(&mut self, category: &NewCategory) -> Result<Category> {
        if self.state.categories.iter().any(|c| c.name == category.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "Category '{}' already exists",
                category.name
            )));
        }

        self.state.next_category_id += 1;
        let category = Category {
            category_id: self.state.next_category_id,
            name: category.name.clone(),
        };
        self.state.categories.push(category.clone());
        Ok(category)
    }

    async fn insert_training_center(
        &mut self,
        training_center: &NewTrainingCenter,
    ) -> Result<TrainingCenter> {
        if self
            .state
            .training_centers
            .iter()
            .any(|t| t.name == training_center.name)
        {
            return Err(StorageError::ConstraintViolation(format!(
                "Training center '{}' already exists",
                training_center.name
            )));
        }

        self.state.next_training_center_id += 1;
        let training_center = TrainingCenter {
            training_center_id: self.state.next_training_center_id,
            name: training_center.name.clone(),
            address: training_center.address.clone(),
            owner: training_center.owner.clone(),
        };
        self.state.training_centers.push(training_center.clone());
        Ok(training_center)
    }

    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()> {
        if self.state.national_id_taken(&athlete.national_id, None) {
            return Err(StorageError::DuplicateKey {
                national_id: athlete.national_id.clone(),
            });
        }
        if self.state.record(athlete).is_none() {
            return Err(StorageError::ConstraintViolation(
                "Referenced category or training center no longer exists".to_string(),
            ));
        }

        self.state.athletes.push(athlete.clone());
        Ok(())
    }

    async fn find_athlete(&mut self, filter: &AthleteFilter) -> Result<Option<AthleteRecord>> {
        Ok(self
            .state
            .athletes
            .iter()
            .filter_map(|a| self.state.record(a))
            .find(|record| filter.matches(record)))
    }

    async fn list_athletes(&mut self) -> Result<Vec<AthleteRecord>> {
        Ok(self
            .state
            .athletes
            .iter()
            .filter_map(|a| self.state.record(a))
            .collect())
    }

    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<bool> {
        if self
            .state
            .national_id_taken(&athlete.national_id, Some(athlete.athlete_id))
        {
            return Err(StorageError::DuplicateKey {
                national_id: athlete.national_id.clone(),
            });
        }

        let Some(stored) = self
            .state
            .athletes
            .iter_mut()
            .find(|a| a.athlete_id == athlete.athlete_id)
        else {
            return Ok(false);
        };

        stored.name = athlete.name.clone();
        stored.national_id = athlete.national_id.clone();
        stored.age = athlete.age;
        stored.weight = athlete.weight;
        stored.height = athlete.height;
        stored.sex = athlete.sex.clone();
        Ok(true)
    }

    async fn delete_athlete(&mut self, id: Uuid) -> Result<bool> {
        let before = self.state.athletes.len();
        self.state.athletes.retain(|a| a.athlete_id != id);
        Ok(self.state.athletes.len() < before)
    }
}
