//! Driving port for reading feedback.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::brand::BrandCreationId;
use crate::domain::feedback::Feedback;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackQuery: Send + Sync {
    /// Feedback created with `brand_creation_id`, in creation order.
    ///
    /// The id is not checked against stored brand creations; an unknown id
    /// yields an empty list.
    async fn list_feedback_for_brand_creation(
        &self,
        brand_creation_id: &BrandCreationId,
    ) -> Result<Vec<Feedback>, Error>;
}
