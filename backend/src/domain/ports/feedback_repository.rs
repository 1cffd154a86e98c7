//! Port for feedback storage.

use async_trait::async_trait;

use crate::domain::brand::BrandCreationId;
use crate::domain::feedback::Feedback;

use super::define_port_error;

define_port_error! {
    /// Errors raised by feedback repository adapters.
    pub enum FeedbackRepositoryError {
        /// The store cannot serve requests, e.g. a poisoned lock.
        Unavailable { message: String } =>
            "feedback store unavailable: {message}",
        /// Feedback with the same identifier already exists.
        Duplicate { id: String } =>
            "feedback {id} already exists",
    }
}

/// Port for appending and scanning feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Append feedback to the store.
    async fn insert(&self, feedback: &Feedback) -> Result<(), FeedbackRepositoryError>;

    /// Feedback referencing `brand_creation_id`, in insertion order.
    async fn list_by_brand_creation(
        &self,
        brand_creation_id: &BrandCreationId,
    ) -> Result<Vec<Feedback>, FeedbackRepositoryError>;
}
