//! Driving port for brand creation reads.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::brand::{BrandCreation, BrandCreationId};

/// Driving port for brand creation read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandCreationQuery: Send + Sync {
    /// Fetch one record; `Ok(None)` when the id is unknown.
    async fn get_brand_creation(&self, id: &BrandCreationId)
    -> Result<Option<BrandCreation>, Error>;

    /// Every stored record, oldest first.
    async fn list_brand_creations(&self) -> Result<Vec<BrandCreation>, Error>;
}
