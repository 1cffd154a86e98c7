//! Outbound adapters implementing domain ports for process-local
//! infrastructure.
//!
//! - **memory**: the in-memory record store behind both repository ports
//! - **events**: broadcast channel behind the brand event publisher port
//!
//! Adapters are thin translators between domain types and their storage or
//! transport. They contain no business logic.

pub mod events;
pub mod memory;
