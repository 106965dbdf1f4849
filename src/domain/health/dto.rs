use serde::Serialize;
use utoipa::ToSchema;

/// Health check response.
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: HealthState,
    /// Server version.
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// Seconds since the server started.
    #[schema(example = 3600)]
    pub uptime_secs: u64,
}

/// Overall server state.
#[derive(Serialize, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Degraded,
    Unhealthy,
}
