//! Brand creation domain service.
//!
//! Implements the brand creation driving ports on top of a
//! [`BrandCreationRepository`], stamping times from the injected clock and
//! publishing an event after every successful mutation.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::Error;
use crate::domain::brand::{BrandCreation, BrandCreationId};
use crate::domain::brand_events::{BrandEvent, BrandEventKind};
use crate::domain::ports::{
    BrandCreationCommand, BrandCreationQuery, BrandCreationRepository,
    BrandCreationRepositoryError, BrandEventPublisher, CreateBrandCreationRequest,
    NoOpBrandEventPublisher, UpdateBrandCreationRequest,
};

fn map_repository_error(error: BrandCreationRepositoryError) -> Error {
    match error {
        BrandCreationRepositoryError::Unavailable { message } => {
            Error::service_unavailable(format!("brand creation store unavailable: {message}"))
        }
        BrandCreationRepositoryError::Duplicate { id } => {
            Error::internal(format!("brand creation {id} already stored"))
        }
    }
}

/// Brand creation service implementing command and query driving ports.
#[derive(Clone)]
pub struct BrandCreationService<R> {
    repo: Arc<R>,
    events: Arc<dyn BrandEventPublisher>,
    clock: Arc<dyn Clock>,
}

impl<R> BrandCreationService<R> {
    /// Create a service that does not publish events.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            events: Arc::new(NoOpBrandEventPublisher),
            clock,
        }
    }

    /// Publish events to `events` after each mutation.
    #[must_use]
    pub fn with_events(mut self, events: Arc<dyn BrandEventPublisher>) -> Self {
        self.events = events;
        self
    }
}

#[async_trait]
impl<R> BrandCreationCommand for BrandCreationService<R>
where
    R: BrandCreationRepository,
{
    async fn create_brand_creation(
        &self,
        request: CreateBrandCreationRequest,
    ) -> Result<BrandCreation, Error> {
        let record = BrandCreation::create(
            BrandCreationId::random(),
            request.draft,
            self.clock.utc(),
        );
        self.repo
            .insert(&record)
            .await
            .map_err(map_repository_error)?;

        info!(
            brand_creation_id = %record.id(),
            style_mode = %record.style_mode(),
            "brand creation stored"
        );
        self.events.publish(BrandEvent::in_current_trace(
            BrandEventKind::BrandCreationCreated(record.clone()),
        ));
        Ok(record)
    }

    async fn update_brand_creation(
        &self,
        request: UpdateBrandCreationRequest,
    ) -> Result<Option<BrandCreation>, Error> {
        let UpdateBrandCreationRequest { id, patch } = request;
        let touched = patch.touched_fields();
        let Some(record) = self
            .repo
            .update(&id, patch, self.clock.utc())
            .await
            .map_err(map_repository_error)?
        else {
            debug!(brand_creation_id = %id, "update for unknown brand creation");
            return Ok(None);
        };

        info!(
            brand_creation_id = %id,
            status = %record.status(),
            fields = ?touched,
            "brand creation updated"
        );
        self.events.publish(BrandEvent::in_current_trace(
            BrandEventKind::BrandCreationUpdated(record.clone()),
        ));
        Ok(Some(record))
    }
}

#[async_trait]
impl<R> BrandCreationQuery for BrandCreationService<R>
where
    R: BrandCreationRepository,
{
    async fn get_brand_creation(
        &self,
        id: &BrandCreationId,
    ) -> Result<Option<BrandCreation>, Error> {
        self.repo.find_by_id(id).await.map_err(map_repository_error)
    }

    async fn list_brand_creations(&self) -> Result<Vec<BrandCreation>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "brand_creation_service_tests.rs"]
mod tests;
