use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::service::{Fetcher, PageExtractor, SearchService};

pub mod handlers;
pub mod models;

pub fn create_router<F, E>(service: Arc<SearchService<F, E>>, static_dir: &str) -> Router
where
    F: Fetcher + Send + Sync + 'static,
    E: PageExtractor + Send + Sync + 'static,
{
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/search", get(handlers::search_handler::<F, E>))
        .with_state(service)
        // Static file serving for the UI
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}
