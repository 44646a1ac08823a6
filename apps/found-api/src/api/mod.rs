//! HTTP API surface: search endpoint, partner listing, readiness.

pub mod health;
pub mod search;

use axum::{Router, routing::get, routing::post};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// API response wrapper shared by all JSON endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// All API routes with state applied
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/api/search", post(search::search))
        .route("/api/partners", get(search::list_partners))
        .with_state(state.clone())
}

/// Readiness endpoint router (separate so it composes after create_router)
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
