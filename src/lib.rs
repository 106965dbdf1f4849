pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod shutdown;
pub mod state;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::destination::handler::destination_info,
        domain::catalog::handler::list_destinations,
        domain::catalog::handler::featured_destinations,
        domain::catalog::handler::compare_destinations,
        domain::health::handler::health_check,
    ),
    components(
        schemas(
            domain::destination::dto::DestinationInfoResponse,
            domain::destination::dto::DestinationInfo,
            domain::destination::dto::CostAnalysis,
            domain::catalog::dto::DestinationSummary,
            domain::catalog::dto::FeaturedDestination,
            domain::catalog::dto::CompareEntry,
            domain::catalog::dto::DestinationMetrics,
            domain::catalog::dto::PriceTier,
            domain::catalog::dto::Region,
            domain::catalog::dto::Season,
            domain::catalog::dto::Activity,
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "Destinations", description = "Generated travel information"),
        (name = "Catalog", description = "Curated destination catalog"),
        (name = "Health", description = "Service monitoring")
    )
)]
pub struct ApiDoc;

/// Build the application router.
///
/// The static `featured` and `compare` segments take priority over the
/// `:id` capture, so those paths never reach the generator.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(domain::health::handler::health_check))
        .route(
            "/api/destinations",
            get(domain::catalog::handler::list_destinations),
        )
        .route(
            "/api/destinations/featured",
            get(domain::catalog::handler::featured_destinations),
        )
        .route(
            "/api/destinations/compare",
            get(domain::catalog::handler::compare_destinations),
        )
        .route(
            "/api/destinations/:id",
            get(domain::destination::handler::destination_info),
        )
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
