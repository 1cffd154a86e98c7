//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BRAND_STUDIO_*` environment variables or a
//! configuration file, in the usual OrthoConfig precedence order.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use backend::outbound::events::DEFAULT_EVENT_CAPACITY;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Settings controlling how the server binds and whom it talks to.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BRAND_STUDIO")]
pub struct ServerSettings {
    /// Interface to bind. Defaults to all IPv4 interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Comma-separated origins allowed to open the event feed.
    pub allowed_origins: Option<String>,
    /// Per-subscriber buffer of the brand event channel.
    pub event_capacity: Option<usize>,
}

impl ServerSettings {
    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Parse the configured WebSocket origin allow-list.
    ///
    /// # Errors
    /// Returns [`url::ParseError`] when an entry is not an absolute URL.
    pub fn allowed_origins(&self) -> Result<Vec<Url>, url::ParseError> {
        self.allowed_origins
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(Url::parse)
            .collect()
    }

    /// Event channel capacity, never zero.
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_EVENT_CAPACITY)
    }
}
