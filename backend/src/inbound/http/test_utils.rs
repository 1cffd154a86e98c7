//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use super::state::{HttpState, HttpStatePorts};
use crate::domain::{BrandCreationService, FeedbackService};
use crate::outbound::memory::InMemoryRecordStore;
use crate::test_support::clock::MutableClock;

/// Real services over a fresh in-memory store, driven by `clock`.
pub fn memory_state(clock: Arc<MutableClock>) -> HttpState {
    let store = Arc::new(InMemoryRecordStore::new());
    let brands = Arc::new(BrandCreationService::new(store.clone(), clock.clone()));
    let feedback = Arc::new(FeedbackService::new(store, clock));
    HttpState::new(HttpStatePorts {
        brand_creations: brands.clone(),
        brand_creations_query: brands,
        feedback: feedback.clone(),
        feedback_query: feedback,
    })
}

/// App exposing every REST endpoint under `/api/v1`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(web::scope("/api/v1").configure(super::configure))
}
