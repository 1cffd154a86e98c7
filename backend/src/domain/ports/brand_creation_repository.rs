//! Port for brand creation storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::brand::{BrandCreation, BrandCreationId, BrandCreationPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by brand creation repository adapters.
    pub enum BrandCreationRepositoryError {
        /// The store cannot serve requests, e.g. a poisoned lock.
        Unavailable { message: String } =>
            "brand creation store unavailable: {message}",
        /// A record with the same identifier already exists.
        Duplicate { id: String } =>
            "brand creation {id} already exists",
    }
}

/// Port for storing and reading brand creations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandCreationRepository: Send + Sync {
    /// Store a new record.
    async fn insert(&self, record: &BrandCreation) -> Result<(), BrandCreationRepositoryError>;

    /// Find a record by id.
    async fn find_by_id(
        &self,
        id: &BrandCreationId,
    ) -> Result<Option<BrandCreation>, BrandCreationRepositoryError>;

    /// Merge `patch` into the stored record as one atomic step.
    ///
    /// Returns the merged record, or `None` when `id` is unknown.
    async fn update(
        &self,
        id: &BrandCreationId,
        patch: BrandCreationPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<BrandCreation>, BrandCreationRepositoryError>;

    /// All records, oldest first.
    async fn list(&self) -> Result<Vec<BrandCreation>, BrandCreationRepositoryError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn unavailable_error_formats_message() {
        let err = BrandCreationRepositoryError::unavailable("lock poisoned");
        assert_eq!(
            err.to_string(),
            "brand creation store unavailable: lock poisoned"
        );
    }

    #[rstest]
    fn duplicate_error_names_id() {
        let id = BrandCreationId::random();
        let err = BrandCreationRepositoryError::duplicate(id.to_string());
        assert!(err.to_string().contains(&id.to_string()));
    }
}
