//! Shared WebSocket adapter state.
//!
//! WebSocket entry points depend on the event feed port instead of the
//! broadcast adapter directly, which keeps the session loop testable.

use std::sync::Arc;

use url::{Origin, Url};

use crate::domain::ports::BrandEventFeed;

/// Dependency bundle for WebSocket handlers.
#[derive(Clone)]
pub struct WsState {
    pub events: Arc<dyn BrandEventFeed>,
    allowed_origins: Arc<[Origin]>,
}

impl WsState {
    /// Construct state from the event feed and the origins allowed to
    /// upgrade.
    pub fn new(events: Arc<dyn BrandEventFeed>, allowed_origins: &[Url]) -> Self {
        Self {
            events,
            allowed_origins: allowed_origins.iter().map(Url::origin).collect(),
        }
    }

    /// Whether `origin` matches an allow-listed scheme, host and port.
    pub fn allows(&self, origin: &Url) -> bool {
        let origin = origin.origin();
        origin.is_tuple() && self.allowed_origins.contains(&origin)
    }
}
