//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! REST handlers live under [`http`]; the live brand event feed is served
//! by [`ws`].

pub mod http;
pub mod ws;
