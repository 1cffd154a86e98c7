//! Feedback domain service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::Error;
use crate::domain::brand::BrandCreationId;
use crate::domain::brand_events::{BrandEvent, BrandEventKind};
use crate::domain::feedback::{Feedback, FeedbackId};
use crate::domain::ports::{
    BrandEventPublisher, FeedbackCommand, FeedbackQuery, FeedbackRepository,
    FeedbackRepositoryError, NoOpBrandEventPublisher, SubmitFeedbackRequest,
};

fn map_repository_error(error: FeedbackRepositoryError) -> Error {
    match error {
        FeedbackRepositoryError::Unavailable { message } => {
            Error::service_unavailable(format!("feedback store unavailable: {message}"))
        }
        FeedbackRepositoryError::Duplicate { id } => {
            Error::internal(format!("feedback {id} already stored"))
        }
    }
}

/// Feedback service implementing command and query driving ports.
///
/// Dangling `brandCreationId` references are accepted as-is.
#[derive(Clone)]
pub struct FeedbackService<R> {
    repo: Arc<R>,
    events: Arc<dyn BrandEventPublisher>,
    clock: Arc<dyn Clock>,
}

impl<R> FeedbackService<R> {
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            events: Arc::new(NoOpBrandEventPublisher),
            clock,
        }
    }

    #[must_use]
    pub fn with_events(mut self, events: Arc<dyn BrandEventPublisher>) -> Self {
        self.events = events;
        self
    }
}

#[async_trait]
impl<R> FeedbackCommand for FeedbackService<R>
where
    R: FeedbackRepository,
{
    async fn submit_feedback(&self, request: SubmitFeedbackRequest) -> Result<Feedback, Error> {
        let feedback = Feedback::record(FeedbackId::random(), request.draft, self.clock.utc());
        self.repo
            .insert(&feedback)
            .await
            .map_err(map_repository_error)?;

        info!(
            feedback_id = %feedback.id(),
            brand_creation_id = ?feedback.brand_creation_id().map(ToString::to_string),
            rating = feedback.rating().value(),
            category = %feedback.category(),
            "feedback recorded"
        );
        self.events.publish(BrandEvent::in_current_trace(
            BrandEventKind::FeedbackReceived(feedback.clone()),
        ));
        Ok(feedback)
    }
}

#[async_trait]
impl<R> FeedbackQuery for FeedbackService<R>
where
    R: FeedbackRepository,
{
    async fn list_feedback_for_brand_creation(
        &self,
        brand_creation_id: &BrandCreationId,
    ) -> Result<Vec<Feedback>, Error> {
        self.repo
            .list_by_brand_creation(brand_creation_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "feedback_service_tests.rs"]
mod tests;
