//! FacDash API Gateway
//!
//! The entry point for all dashboard requests. Handles:
//! - Request routing
//! - View-model derivation via the analytics layer
//! - Observability (logging, metrics, tracing)

mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use facdash_common::{config::AppConfig, metrics, store::JsonWarehouse, VERSION};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<JsonWarehouse>,
    pub started_at: DateTime<Utc>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    init_tracing(&config);

    info!("Starting FacDash API Gateway v{}", VERSION);

    let config = Arc::new(config);

    // Initialize metrics
    metrics::register_metrics();
    if config.observability.metrics_port > 0 {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.observability.metrics_port));
        PrometheusBuilder::new().with_http_listener(addr).install()?;
        info!("Prometheus metrics exposed on {}", addr);
    }

    // Open the faculty warehouse
    info!("Opening faculty warehouse...");
    let store = Arc::new(JsonWarehouse::new(&config.store)?);

    // Create app state
    let state = AppState {
        config: config.clone(),
        store,
        started_at: Utc::now(),
    };

    // Build the router
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber from configuration
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    if config.observability.json_logging {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    let timeout = TimeoutLayer::new(state.config.request_timeout());

    // API routes
    let api_routes = Router::new()
        // Health endpoints
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))

        // Keyword endpoints
        .route("/keywords", get(handlers::keywords::list_keywords))
        .route("/keywords/top", get(handlers::keywords::top_keywords))

        // Professor endpoints
        .route("/professors/filter", post(handlers::professors::filter_professors))
        .route("/professors/{name}", get(handlers::professors::get_profile))
        .route("/professors/{name}/keywords", get(handlers::professors::get_keywords))
        .route("/professors/{name}/coauthors", get(handlers::professors::top_coauthors))

        // Publication endpoints
        .route("/professors/{name}/publications", get(handlers::publications::by_year))
        .route(
            "/professors/{name}/publications/by-category",
            get(handlers::publications::by_category),
        )
        .route(
            "/professors/{name}/publication-titles",
            get(handlers::publications::titles),
        )
        .route(
            "/professors/{name}/contributions",
            get(handlers::publications::contributions),
        )
        .route(
            "/professors/{name}/conference-counts",
            get(handlers::publications::conference_counts),
        )

        // Graph endpoints
        .route("/professors/{name}/graph", get(handlers::graphs::neighborhood_graph))
        .route("/graph", get(handlers::graphs::global_graph))

        // Research area endpoints
        .route("/research-areas", get(handlers::areas::taxonomy))
        .route("/research-areas/distribution", get(handlers::areas::distribution));

    // Compose the app
    Router::new()
        .nest("/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(request_id)
        .layer(propagate_id)
        .layer(timeout)
        .with_state(state)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}
