// HTTP routes: GET /performance, JSON 404 for everything else

mod auth;
mod http;

use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::provider::SharedProvider;
use crate::rate_tracker::RateTracker;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) provider: SharedProvider,
    pub(crate) rate_tracker: Arc<RateTracker>,
    pub(crate) config: AppConfig,
}

/// Builds the router. Auth wraps routes and fallback alike; CORS sits outside auth so
/// preflight requests are answered without a key.
pub fn app(provider: SharedProvider, rate_tracker: Arc<RateTracker>, config: AppConfig) -> Router {
    let state = AppState {
        provider,
        rate_tracker,
        config,
    };
    Router::new()
        .route(
            "/performance",
            get(http::performance_handler).fallback(http::not_found_handler),
        ) // GET /performance
        .fallback(http::not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
