//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BrandCreationCommand, BrandCreationQuery, FeedbackCommand, FeedbackQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub brand_creations: Arc<dyn BrandCreationCommand>,
    pub brand_creations_query: Arc<dyn BrandCreationQuery>,
    pub feedback: Arc<dyn FeedbackCommand>,
    pub feedback_query: Arc<dyn FeedbackQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub brand_creations: Arc<dyn BrandCreationCommand>,
    pub brand_creations_query: Arc<dyn BrandCreationQuery>,
    pub feedback: Arc<dyn FeedbackCommand>,
    pub feedback_query: Arc<dyn FeedbackQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{BrandCreationService, FeedbackService};
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use backend::outbound::memory::InMemoryRecordStore;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(InMemoryRecordStore::new());
    /// let brands = Arc::new(BrandCreationService::new(store.clone(), Arc::new(DefaultClock)));
    /// let feedback = Arc::new(FeedbackService::new(store, Arc::new(DefaultClock)));
    /// let state = HttpState::new(HttpStatePorts {
    ///     brand_creations: brands.clone(),
    ///     brand_creations_query: brands,
    ///     feedback: feedback.clone(),
    ///     feedback_query: feedback,
    /// });
    /// let _brands = state.brand_creations.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            brand_creations,
            brand_creations_query,
            feedback,
            feedback_query,
        } = ports;
        Self {
            brand_creations,
            brand_creations_query,
            feedback,
            feedback_query,
        }
    }
}
