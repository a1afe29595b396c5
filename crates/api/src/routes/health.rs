//! Root-level liveness endpoint, mounted outside `/api`.

use std::time::Duration;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Upper bound on the `SELECT 1` probe so a stuck pool reports `degraded`
/// instead of hanging the load balancer check.
const DB_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_probe(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy {
                ServiceStatus::Ok
            } else {
                ServiceStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = matches!(
        tokio::time::timeout(DB_PROBE_TIMEOUT, consorcio_db::health_check(&state.pool)).await,
        Ok(Ok(()))
    );
    if !db_healthy {
        tracing::warn!("Database probe failed, reporting degraded");
    }
    Json(HealthReport::from_probe(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
