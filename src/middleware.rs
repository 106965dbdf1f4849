//! Request tracing middleware.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Response header carrying the per-request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps every request in a tracing span with a fresh request ID, logs
/// completion with latency, echoes the ID back to the client and records
/// request counters and a duration histogram.
pub async fn request_tracing(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    async move {
        tracing::info!("Request started");
        let start = Instant::now();

        let mut response = next.run(request).await;

        let latency = start.elapsed();
        let status = response.status();

        tracing::info!(
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "Request completed"
        );

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        let status_label = status.as_u16().to_string();
        metrics::counter!(
            "http_requests_total",
            "method" => method.to_string(),
            "path" => metrics_path(&path),
            "status" => status_label.clone()
        )
        .increment(1);
        metrics::histogram!(
            "http_request_duration_seconds",
            "method" => method.to_string(),
            "path" => metrics_path(&path),
            "status" => status_label
        )
        .record(latency.as_secs_f64());

        response
    }
    .instrument(span)
    .await
}

/// Collapse high-cardinality segments for metric labels: every detail
/// request folds into `/api/destinations/{id}`.
fn metrics_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["api", "destinations", "featured"] | ["api", "destinations", "compare"] => {
            path.to_string()
        }
        ["api", "destinations", _id, ..] => "/api/destinations/{id}".to_string(),
        _ => path.to_string(),
    }
}
