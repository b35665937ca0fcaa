//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // ELLO_CORS_ORIGINS can be comma-separated list of origins, or "*" for any
    let cors = match std::env::var("ELLO_CORS_ORIGINS").ok() {
        Some(origins) if origins == "*" => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => {
            // Default: allow localhost origins for development
            CorsLayer::new()
                .allow_origin(AllowOrigin::list([
                    HeaderValue::from_static("http://localhost:3000"),
                    HeaderValue::from_static("http://127.0.0.1:3000"),
                ]))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let assets = ServeDir::new(&state.asset_dir);

    Router::new()
        .route("/graphql", post(handlers::graphql))
        .route("/health", get(handlers::health_check))
        .nest_service("/static", assets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
