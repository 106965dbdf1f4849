use axum::{extract::Query, response::IntoResponse, Json};
use serde::Deserialize;

use super::dto::{CatalogQuery, CompareEntry, CompareSelection, DestinationSummary, FeaturedDestination};
use super::service::CatalogService;
use crate::error::{AppError, ErrorResponse};

/// Explore the destination catalog.
#[utoipa::path(
    get,
    path = "/api/destinations",
    tag = "Catalog",
    params(
        ("price" = Option<String>, Query, description = "Comma-separated price tiers (Budget, Moderate, High, Luxury)"),
        ("region" = Option<String>, Query, description = "Comma-separated regions (Europe, Asia, Americas, Africa, Oceania)"),
        ("season" = Option<String>, Query, description = "Comma-separated seasons (Spring, Summer, Fall, Winter)"),
        ("activities" = Option<String>, Query, description = "Comma-separated activities; entries with any selected activity match")
    ),
    responses(
        (status = 200, description = "Matching catalog entries", body = [DestinationSummary]),
        (status = 400, description = "Unknown filter value", body = ErrorResponse)
    )
)]
pub async fn list_destinations(
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.parse()?;
    Ok(Json(CatalogService::list(&filter)))
}

/// Landing-page highlights.
#[utoipa::path(
    get,
    path = "/api/destinations/featured",
    tag = "Catalog",
    responses(
        (status = 200, description = "Featured destinations", body = [FeaturedDestination])
    )
)]
pub async fn featured_destinations() -> impl IntoResponse {
    Json(CatalogService::featured())
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub ids: Option<String>,
}

/// Compare up to four destinations by their metric scores.
#[utoipa::path(
    get,
    path = "/api/destinations/compare",
    tag = "Catalog",
    params(
        ("ids" = String, Query, description = "Comma-separated destination identifiers, 1 to 4 of them")
    ),
    responses(
        (status = 200, description = "Metric scores in request order", body = [CompareEntry]),
        (status = 400, description = "Selection outside the 1 to 4 range", body = ErrorResponse),
        (status = 404, description = "Unknown destination identifier", body = ErrorResponse)
    )
)]
pub async fn compare_destinations(
    Query(query): Query<CompareQuery>,
) -> Result<impl IntoResponse, AppError> {
    let selection = CompareSelection::from_query(query.ids.as_deref().unwrap_or_default())?;
    Ok(Json(CatalogService::compare(&selection)?))
}
