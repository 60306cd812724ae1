use std::env;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use immoval_api::{create_router, AppState};
use immoval_core::config::LayeredConfig;
use immoval_engine::AppContext;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "immoval_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = LayeredConfig::with_defaults();
    if let Ok(config_path) = env::var("IMMOVAL_CONFIG") {
        config = match config.load_from_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config file {}: {}", config_path, e);
                std::process::exit(1);
            }
        };
    }
    let config = config.load_from_env();

    tracing::info!(
        features = %config.features_path.value.display(),
        locations = %config.locations_path.value.display(),
        model = %config.model_path.value.display(),
        port = config.api_port.value,
        "Starting Immoval API server"
    );

    // Reference tables and model load once; a failure here is fatal.
    let ctx = match AppContext::load(&config) {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => {
            tracing::error!("Failed to load application context: {}", e);
            tracing::error!(
                "Remediation:\n\
                1. Check that the reference CSV tables exist and have their expected headers\n\
                2. Check that the model artifact exists and deserializes\n\
                3. Override paths via IMMOVAL_FEATURES_PATH / IMMOVAL_LOCATIONS_PATH / IMMOVAL_MODEL_PATH"
            );
            std::process::exit(1);
        }
    };

    let state = AppState::new(ctx);

    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(TraceLayer::new_for_http()).layer(cors);

    let addr = format!("0.0.0.0:{}", config.api_port.value);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
