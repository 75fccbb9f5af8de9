// Shared-secret check on the x-api-key header

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::AppState;
use crate::error::ApiError;

const API_KEY_HEADER: &str = "x-api-key";

/// Rejects with 401 when `api.need_auth` is set and the header is missing or differs from `api.key`.
pub(super) async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let api = &state.config.api;
    if !api.need_auth {
        return Ok(next.run(request).await);
    }
    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| key == api.key);
    if authorized {
        return Ok(next.run(request).await);
    }
    tracing::debug!(
        method = %request.method(),
        path = request.uri().path(),
        key_present = request.headers().contains_key(API_KEY_HEADER),
        "rejected request without valid api key"
    );
    Err(ApiError::Unauthorized)
}
