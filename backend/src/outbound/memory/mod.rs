//! In-memory record store.
//!
//! Holds brand creations and feedback for the lifetime of the process.
//! Nothing is persisted; a restart starts from an empty store.
//!
//! Each operation takes its lock exactly once and never awaits while
//! holding it, so every read or read-modify-write is atomic with respect to
//! other requests. Concurrent updates to one record are last-write-wins.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::error;

use crate::domain::brand::{BrandCreation, BrandCreationId, BrandCreationPatch};
use crate::domain::feedback::Feedback;
use crate::domain::ports::{
    BrandCreationRepository, BrandCreationRepositoryError, FeedbackRepository,
    FeedbackRepositoryError,
};

#[derive(Debug, Default)]
struct BrandTable {
    records: HashMap<BrandCreationId, BrandCreation>,
    insertion_order: Vec<BrandCreationId>,
}

/// Process-local store implementing both repository ports.
///
/// Construct one at start-up and share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    brands: RwLock<BrandTable>,
    feedback: RwLock<Vec<Feedback>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn brand_poisoned<T>(_: PoisonError<T>) -> BrandCreationRepositoryError {
    error!("brand creation store lock poisoned");
    BrandCreationRepositoryError::unavailable("brand creation lock poisoned")
}

fn feedback_poisoned<T>(_: PoisonError<T>) -> FeedbackRepositoryError {
    error!("feedback store lock poisoned");
    FeedbackRepositoryError::unavailable("feedback lock poisoned")
}

#[async_trait]
impl BrandCreationRepository for InMemoryRecordStore {
    async fn insert(&self, record: &BrandCreation) -> Result<(), BrandCreationRepositoryError> {
        let mut table = self.brands.write().map_err(brand_poisoned)?;
        let id = *record.id();
        if table.records.contains_key(&id) {
            return Err(BrandCreationRepositoryError::duplicate(id.to_string()));
        }
        table.records.insert(id, record.clone());
        table.insertion_order.push(id);
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &BrandCreationId,
    ) -> Result<Option<BrandCreation>, BrandCreationRepositoryError> {
        let table = self.brands.read().map_err(brand_poisoned)?;
        Ok(table.records.get(id).cloned())
    }

    async fn update(
        &self,
        id: &BrandCreationId,
        patch: BrandCreationPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<BrandCreation>, BrandCreationRepositoryError> {
        let mut table = self.brands.write().map_err(brand_poisoned)?;
        Ok(table.records.get_mut(id).map(|record| {
            record.apply(patch, now);
            record.clone()
        }))
    }

    async fn list(&self) -> Result<Vec<BrandCreation>, BrandCreationRepositoryError> {
        let table = self.brands.read().map_err(brand_poisoned)?;
        Ok(table
            .insertion_order
            .iter()
            .filter_map(|id| table.records.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryRecordStore {
    async fn insert(&self, feedback: &Feedback) -> Result<(), FeedbackRepositoryError> {
        let mut entries = self.feedback.write().map_err(feedback_poisoned)?;
        if entries.iter().any(|entry| entry.id() == feedback.id()) {
            return Err(FeedbackRepositoryError::duplicate(feedback.id().to_string()));
        }
        entries.push(feedback.clone());
        Ok(())
    }

    async fn list_by_brand_creation(
        &self,
        brand_creation_id: &BrandCreationId,
    ) -> Result<Vec<Feedback>, FeedbackRepositoryError> {
        let entries = self.feedback.read().map_err(feedback_poisoned)?;
        Ok(entries
            .iter()
            .filter(|entry| entry.brand_creation_id() == Some(brand_creation_id))
            .cloned()
            .collect())
    }
}
