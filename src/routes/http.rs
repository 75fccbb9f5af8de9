// GET handlers: performance snapshot, JSON 404 fallback

use axum::{
    Json,
    extract::State,
    http::{Method, Uri},
};

use super::AppState;
use crate::collector;
use crate::error::ApiError;
use crate::formatter::format_snapshot;
use crate::models::PerformanceSnapshot;

/// GET /performance: collects a fresh snapshot and network rates since the previous call.
/// A failed collection leaves the rate tracker untouched.
pub(super) async fn performance_handler(
    State(state): State<AppState>,
) -> Result<Json<PerformanceSnapshot>, ApiError> {
    let raw = collector::collect(state.provider.as_ref(), state.config.collect_timeout())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, operation = "collect", "Error fetching performance metrics");
        })?;

    let rates = state.rate_tracker.sample(raw.primary_sample());
    if raw.interfaces.is_empty() {
        tracing::warn!(operation = "sample_network", "provider reported no network interfaces");
    }
    tracing::debug!(
        operation = "sample_network",
        input_per_second = rates.input_per_second,
        output_per_second = rates.output_per_second,
        "network rates computed"
    );

    Ok(Json(format_snapshot(&state.config.server.name, &raw, &rates)))
}

/// Any unmatched path or method: 404 `{"error": "Cannot <METHOD> <path>"}`.
pub(super) async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
