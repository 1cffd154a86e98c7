//! Liveness and readiness checks for orchestrators and load balancers.
//!
//! Both endpoints sit outside `/api/v1`, are never cached and report the
//! server's lifecycle phase as `{"phase": "..."}`.
//!
//! | phase      | `/health/live` | `/health/ready` |
//! |------------|----------------|-----------------|
//! | `starting` | 200            | 503             |
//! | `serving`  | 200            | 200             |
//! | `draining` | 503            | 503             |

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Where the server is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    /// Process up, listener not yet bound.
    Starting,
    /// Accepting brand studio traffic.
    Serving,
    /// Shutdown requested; in-flight requests are finishing.
    Draining,
}

impl LifecyclePhase {
    const fn to_bits(self) -> u8 {
        match self {
            Self::Starting => 0,
            Self::Serving => 1,
            Self::Draining => 2,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

/// Lifecycle phase shared between the bootstrap and the health handlers.
#[derive(Debug)]
pub struct HealthState(AtomicU8);

impl Default for HealthState {
    fn default() -> Self {
        Self(AtomicU8::new(LifecyclePhase::Starting.to_bits()))
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        LifecyclePhase::from_bits(self.0.load(Ordering::Acquire))
    }

    /// Move from `starting` to `serving`. A draining server stays draining.
    pub fn mark_ready(&self) {
        let _ = self.0.compare_exchange(
            LifecyclePhase::Starting.to_bits(),
            LifecyclePhase::Serving.to_bits(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Enter `draining`; both checks fail from here on.
    pub fn begin_draining(&self) {
        self.0
            .store(LifecyclePhase::Draining.to_bits(), Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == LifecyclePhase::Serving
    }

    pub fn is_alive(&self) -> bool {
        self.phase() != LifecyclePhase::Draining
    }
}

/// Body of both health responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthReport {
    pub phase: LifecyclePhase,
}

fn report(passing: bool, phase: LifecyclePhase) -> HttpResponse {
    let mut response = if passing {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthReport { phase })
}

/// Readiness: 200 only while serving.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving brand studio traffic", body = HealthReport),
        (status = 503, description = "Starting or draining", body = HealthReport)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    report(state.is_ready(), state.phase())
}

/// Liveness: 200 until draining begins.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive", body = HealthReport),
        (status = 503, description = "Draining for shutdown", body = HealthReport)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    report(state.is_alive(), state.phase())
}
