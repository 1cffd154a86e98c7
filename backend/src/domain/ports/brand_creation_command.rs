//! Driving port for brand creation mutations.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::brand::{BrandCreation, BrandCreationId, BrandCreationPatch, NewBrandCreation};

/// Request to store a new brand creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBrandCreationRequest {
    pub draft: NewBrandCreation,
}

/// Request to merge a patch into an existing brand creation.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBrandCreationRequest {
    pub id: BrandCreationId,
    pub patch: BrandCreationPatch,
}

/// Driving port for brand creation write operations.
///
/// Inputs arrive already validated; adapters own shape validation and
/// report field errors before calling in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandCreationCommand: Send + Sync {
    /// Store a new record in the `creating` state and return it.
    async fn create_brand_creation(
        &self,
        request: CreateBrandCreationRequest,
    ) -> Result<BrandCreation, Error>;

    /// Merge the patch and return the merged record.
    ///
    /// `Ok(None)` signals an unknown id; it is not an error.
    async fn update_brand_creation(
        &self,
        request: UpdateBrandCreationRequest,
    ) -> Result<Option<BrandCreation>, Error>;
}
