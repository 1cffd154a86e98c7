//! Brand studio library modules.
//!
//! The crate follows a hexagonal layout: `domain` owns the brand creation
//! and feedback model plus the ports it depends on, `inbound` adapts HTTP
//! and WebSocket traffic onto the driving ports, and `outbound` supplies the
//! in-memory record store and the broadcast event feed.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
