//! Application-specific readiness handler with a real Redis check.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Readiness check endpoint that verifies the Redis connection.
///
/// The embedding provider is intentionally not probed here: readiness gates
/// on what the process holds open (the store connection); a provider outage
/// surfaces per request as a non-fatal search error instead.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "redis",
        Box::pin(async {
            let mut redis = state.redis.clone();
            database::redis::check_health(&mut redis)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
