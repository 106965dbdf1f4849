use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;

use wanderlust_server::app;
use wanderlust_server::config::AppConfig;
use wanderlust_server::domain::destination::client::GeminiClient;
use wanderlust_server::logging::init_logging;
use wanderlust_server::shutdown::shutdown_signal;
use wanderlust_server::state::AppState;

#[tokio::main]
async fn main() {
    // 1. Load environment variables
    dotenvy::dotenv().ok();

    // 2. Initialize logging; the guard flushes the file appender on exit
    let _guard = init_logging();

    // 3. Load configuration
    let config = AppConfig::from_env().expect("invalid configuration");

    // 4. Install the Prometheus recorder backing the metrics macros
    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install metrics recorder");

    // 5. Wire the Gemini client into the router
    let state = AppState::new(Arc::new(GeminiClient::new(&config)));
    let app = app(state).route(
        "/metrics",
        get(move || {
            let handle = metrics_handle.clone();
            async move { handle.render() }
        }),
    );

    // 6. Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
