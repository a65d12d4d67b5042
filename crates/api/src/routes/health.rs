//! Liveness endpoint. Always answers 200; a broken store shows up as
//! `"degraded"` in the body rather than as an error status.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_db_check(db_check: Result<(), sqlx::Error>) -> Self {
        let db_healthy = match db_check {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Task store failed its health check");
                false
            }
        };
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
    Json(HealthReport::from_db_check(
        taskboard_db::health_check(&state.pool).await,
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
