//! Wiring of the record store, event feed and services into adapter state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use backend::domain::ports::BrandEventPublisher;
use backend::domain::{BrandCreationService, FeedbackService};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::inbound::ws::state::WsState;
use backend::outbound::events::BroadcastBrandEvents;
use backend::outbound::memory::InMemoryRecordStore;

use super::ServerConfig;

/// Adapter state shared by every worker.
#[derive(Clone)]
pub(super) struct AppStates {
    pub(super) http: web::Data<HttpState>,
    pub(super) ws: web::Data<WsState>,
}

/// Build one store and one event channel shared by HTTP and WebSocket
/// adapters.
pub(super) fn build_states(config: &ServerConfig) -> AppStates {
    let store = Arc::new(InMemoryRecordStore::new());
    let events = Arc::new(BroadcastBrandEvents::new(config.event_capacity));
    let publisher: Arc<dyn BrandEventPublisher> = events.clone();
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    let brands = Arc::new(
        BrandCreationService::new(store.clone(), clock.clone()).with_events(publisher.clone()),
    );
    let feedback = Arc::new(FeedbackService::new(store, clock).with_events(publisher));

    let http = HttpState::new(HttpStatePorts {
        brand_creations: brands.clone(),
        brand_creations_query: brands,
        feedback: feedback.clone(),
        feedback_query: feedback,
    });
    let ws = WsState::new(events, &config.allowed_origins);

    AppStates {
        http: web::Data::new(http),
        ws: web::Data::new(ws),
    }
}
