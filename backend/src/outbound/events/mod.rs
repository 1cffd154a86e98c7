//! Broadcast adapter for brand events.
//!
//! Backed by a bounded `tokio::sync::broadcast` channel. Publishing never
//! blocks; subscribers that fall behind lose the oldest events and skip
//! ahead.

use tokio::sync::broadcast;
use tracing::trace;

use crate::domain::brand_events::BrandEvent;
use crate::domain::ports::{BrandEventFeed, BrandEventPublisher};

/// Default channel capacity when configuration does not override it.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// In-process fan-out of brand events to live subscribers.
#[derive(Debug, Clone)]
pub struct BroadcastBrandEvents {
    sender: broadcast::Sender<BrandEvent>,
}

impl BroadcastBrandEvents {
    /// Create a channel buffering up to `capacity` events per subscriber.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastBrandEvents {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl BrandEventPublisher for BroadcastBrandEvents {
    fn publish(&self, event: BrandEvent) {
        // Sending only fails when nobody is listening.
        if let Ok(receivers) = self.sender.send(event) {
            trace!(receivers, "brand event broadcast");
        }
    }
}

impl BrandEventFeed for BroadcastBrandEvents {
    fn subscribe(&self) -> broadcast::Receiver<BrandEvent> {
        self.sender.subscribe()
    }
}
