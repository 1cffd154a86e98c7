//! Driving port for recording feedback.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::feedback::{Feedback, NewFeedback};

/// Request to record one feedback submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFeedbackRequest {
    pub draft: NewFeedback,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackCommand: Send + Sync {
    /// Record feedback and return the stored copy with defaults applied.
    async fn submit_feedback(&self, request: SubmitFeedbackRequest) -> Result<Feedback, Error>;
}
