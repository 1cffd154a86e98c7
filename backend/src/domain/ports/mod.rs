//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, `BrandEventPublisher`) are implemented by
//! outbound adapters. Driving ports (`*Command`, `*Query`) are implemented by
//! domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod brand_creation_command;
mod brand_creation_query;
mod brand_creation_repository;
mod brand_event_publisher;
mod feedback_command;
mod feedback_query;
mod feedback_repository;

#[cfg(test)]
pub use brand_creation_command::MockBrandCreationCommand;
pub use brand_creation_command::{
    BrandCreationCommand, CreateBrandCreationRequest, UpdateBrandCreationRequest,
};
#[cfg(test)]
pub use brand_creation_query::MockBrandCreationQuery;
pub use brand_creation_query::BrandCreationQuery;
#[cfg(test)]
pub use brand_creation_repository::MockBrandCreationRepository;
pub use brand_creation_repository::{BrandCreationRepository, BrandCreationRepositoryError};
#[cfg(test)]
pub use brand_event_publisher::MockBrandEventPublisher;
pub use brand_event_publisher::{BrandEventFeed, BrandEventPublisher, NoOpBrandEventPublisher};
#[cfg(test)]
pub use feedback_command::MockFeedbackCommand;
pub use feedback_command::{FeedbackCommand, SubmitFeedbackRequest};
#[cfg(test)]
pub use feedback_query::MockFeedbackQuery;
pub use feedback_query::FeedbackQuery;
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
pub use feedback_repository::{FeedbackRepository, FeedbackRepositoryError};
