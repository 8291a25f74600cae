//! Clubdesk application entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Build the shared HTTP client, data-store handle, and token authority
//! 3. Build router with API routes
//! 4. Apply CORS for the browser frontend
//! 5. Start Axum server

use axum::http::{header, HeaderValue, Method};
use clubdesk::{
    auth::middleware::AppState, auth::token::TokenAuthority, config::Config, db::Db, routes,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[tokio::main]
async fn main() {
    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config from environment
    let config = Config::from_env().expect("Failed to load config");
    tracing::info!("Starting clubdesk on {}", config.bind_addr);

    // One HTTP client pools connections for both the data store and the RPC proxy
    let http = reqwest::Client::new();
    let db = Db::new(http.clone(), &config.supabase_url, &config.supabase_key);
    let tokens = Arc::new(TokenAuthority::new(
        config.jwt_secret.as_bytes(),
        config.jwt_expiry_secs,
    ));

    // CORS: only the configured frontend origins, with credentials
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse().expect("Invalid origin in ALLOWED_ORIGINS"))
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    let state = AppState {
        db,
        tokens,
        http,
        config: Arc::new(config.clone()),
    };

    let app = routes::api_router().layer(cors).with_state(state);

    // Bind to configured address
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
