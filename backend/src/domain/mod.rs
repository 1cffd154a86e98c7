//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed brand creation and feedback entities, the
//! ports adapters implement, and the services behind the driving ports.
//! Keep types transport agnostic and document invariants and serialisation
//! contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - TraceId: request correlation identifier held in task-local storage.
//! - BrandCreationService / FeedbackService: driving port implementations.

pub mod brand;
pub mod brand_creation_service;
pub mod brand_events;
pub mod error;
pub mod feedback;
pub mod feedback_service;
pub mod ports;
pub mod trace_id;

pub use self::brand_creation_service::BrandCreationService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::feedback_service::FeedbackService;
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
