use axum::{extract::State, Json};

use super::dto::{HealthState, HealthStatus};
use crate::state::AppState;

/// Liveness probe.
///
/// Reports process uptime only; the generation provider is never
/// called from here.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HealthState::Healthy,
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
