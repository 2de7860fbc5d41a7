//! Health endpoints: liveness and readiness checks for orchestrators.
//!
//! The process moves through three phases. While starting, the store is not
//! yet connected and readiness fails. Once the listener is bound the instance
//! serves traffic. On a shutdown signal it drains: both checks fail so load
//! balancers stop routing to it while in-flight requests finish.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, http::header, web};

use super::envelope::Envelope;

/// Lifecycle phase reported by the health endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    /// Store connection and socket binding still in progress.
    Starting = 0,
    /// Accepting traffic.
    Serving = 1,
    /// Shutdown requested; finishing in-flight work.
    Draining = 2,
}

impl Phase {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Serving => "serving",
            Self::Draining => "draining",
        }
    }
}

/// Shared lifecycle state read by the health endpoints.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting as u8),
        }
    }
}

impl HealthState {
    /// Create a state in the starting phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move from starting to serving. A draining instance stays draining.
    pub fn mark_ready(&self) {
        let _ = self.phase.compare_exchange(
            Phase::Starting as u8,
            Phase::Serving as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Enter the draining phase; both checks report 503 from now on.
    pub fn drain(&self) {
        self.phase.store(Phase::Draining as u8, Ordering::Release);
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    fn phase_response(&self, healthy: impl Fn(Phase) -> bool) -> HttpResponse {
        let phase = self.phase();
        let envelope = if healthy(phase) {
            Envelope::success(StatusCode::OK, phase.as_str())
        } else {
            Envelope::error(StatusCode::SERVICE_UNAVAILABLE, phase.as_str())
        };

        HttpResponse::build(envelope.status())
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(envelope)
    }
}

/// Readiness check. 200 only while serving.
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    state.phase_response(|phase| phase == Phase::Serving)
}

/// Liveness check. 200 until the instance starts draining.
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    state.phase_response(|phase| phase != Phase::Draining)
}
