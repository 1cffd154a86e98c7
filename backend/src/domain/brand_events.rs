//! Domain events emitted after brand creation and feedback mutations.
//!
//! These events stay transport agnostic so inbound adapters can map them to
//! protocol-specific payloads (e.g., WebSocket JSON frames) without
//! re-encoding domain logic.

use crate::domain::TraceId;
use crate::domain::brand::{BrandCreation, BrandCreationId};
use crate::domain::feedback::Feedback;

/// What happened.
#[derive(Debug, Clone, PartialEq)]
pub enum BrandEventKind {
    /// A brand creation was stored.
    BrandCreationCreated(BrandCreation),
    /// A patch was merged into a brand creation; carries the merged record.
    BrandCreationUpdated(BrandCreation),
    /// Feedback was recorded.
    FeedbackReceived(Feedback),
}

/// Event published after a successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandEvent {
    /// Correlation identifier of the request that caused the event.
    pub trace_id: Option<TraceId>,
    pub kind: BrandEventKind,
}

impl BrandEvent {
    /// Build an event stamped with the trace identifier currently in scope.
    #[must_use]
    pub fn in_current_trace(kind: BrandEventKind) -> Self {
        Self {
            trace_id: TraceId::current(),
            kind,
        }
    }

    /// Brand creation the event concerns, if any.
    ///
    /// Feedback submitted without a brand reference yields `None`.
    #[must_use]
    pub fn brand_creation_id(&self) -> Option<&BrandCreationId> {
        match &self.kind {
            BrandEventKind::BrandCreationCreated(record)
            | BrandEventKind::BrandCreationUpdated(record) => Some(record.id()),
            BrandEventKind::FeedbackReceived(feedback) => feedback.brand_creation_id(),
        }
    }
}
