use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use super::dto::DestinationInfoResponse;
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

/// Generate travel information for a destination.
#[utoipa::path(
    get,
    path = "/api/destinations/{id}",
    tag = "Destinations",
    params(
        ("id" = String, Path, description = "Destination identifier, hyphens standing in for spaces (e.g. `new-york`)")
    ),
    responses(
        (status = 200, description = "Structured travel information", body = DestinationInfoResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn destination_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.destinations.destination_info(&id).await?;
    Ok(Json(response))
}
