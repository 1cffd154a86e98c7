//! Ports for publishing and subscribing to brand events.
//!
//! Publishing is fire-and-forget: it never blocks and never fails the
//! mutation that triggered it.

use tokio::sync::broadcast;

use crate::domain::brand_events::BrandEvent;

/// Outbound port for emitting brand events after successful mutations.
#[cfg_attr(test, mockall::automock)]
pub trait BrandEventPublisher: Send + Sync {
    fn publish(&self, event: BrandEvent);
}

/// Source of live brand events for push adapters.
pub trait BrandEventFeed: Send + Sync {
    /// Receive events published from now on.
    fn subscribe(&self) -> broadcast::Receiver<BrandEvent>;
}

/// Publisher that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpBrandEventPublisher;

impl BrandEventPublisher for NoOpBrandEventPublisher {
    fn publish(&self, _event: BrandEvent) {}
}
