//! Similarity search endpoints.
//!
//! POST /api/search runs the embed-then-KNN pipeline and returns ranked
//! hits. GET /api/partners lists the partner ids the UI offers, plus the
//! sentinel meaning "no partner selected".

use axum::{Json, extract::State, http::StatusCode};
use domain_lostfound::{
    FoundReport, LostFoundError, NO_PARTNER_SELECTED, SearchQuery,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use super::ApiResponse;
use crate::state::AppState;

/// Search request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Free-text description of the lost item
    pub query: String,
    /// Partner id to filter on; "00000" means no selection and yields an
    /// empty result without running a search
    #[serde(default = "default_partner")]
    pub partner_id: String,
}

fn default_partner() -> String {
    NO_PARTNER_SELECTED.to_string()
}

/// Search response payload
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    /// Ranked hits, best (smallest cosine distance) first
    pub results: Vec<FoundReport>,
    /// Number of hits returned
    pub count: usize,
}

/// Partner listing payload for the UI selector
#[derive(Debug, Serialize, ToSchema)]
pub struct PartnersResponse {
    /// Sentinel value meaning "no partner selected"
    pub none_value: String,
    /// Valid partner ids
    pub partner_ids: Vec<String>,
}

/// Map a domain error to the HTTP status it should produce.
///
/// Caller mistakes (empty text, unknown partner) are 400. A failing
/// embedding provider is an upstream fault, 502. Index failures are 500.
fn error_status(err: &LostFoundError) -> StatusCode {
    match err {
        LostFoundError::EmptyQuery | LostFoundError::UnknownPartner(_) => StatusCode::BAD_REQUEST,
        LostFoundError::Provider(_) => StatusCode::BAD_GATEWAY,
        LostFoundError::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Search for found reports similar to the query text
#[utoipa::path(
    post,
    path = "/api/search",
    tag = "search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Ranked search hits", body = ApiResponse<SearchResponse>),
        (status = 400, description = "Empty query or unknown partner id"),
        (status = 502, description = "Embedding provider unavailable"),
        (status = 500, description = "Search index error")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> (StatusCode, Json<ApiResponse<SearchResponse>>) {
    let partner = match state.config.partners.parse_filter(&request.partner_id) {
        Ok(partner) => partner,
        Err(e) => {
            return (error_status(&e), Json(ApiResponse::error(e.to_string())));
        }
    };

    let query = SearchQuery::new(request.query, partner);

    match state.service.search_reports(&query).await {
        Ok(results) => {
            info!(hits = results.len(), "search request served");
            let count = results.len();
            (
                StatusCode::OK,
                Json(ApiResponse::success(SearchResponse { results, count })),
            )
        }
        Err(e) => {
            error!("Search failed: {}", e);
            (error_status(&e), Json(ApiResponse::error(e.to_string())))
        }
    }
}

/// List partner ids available for filtering
#[utoipa::path(
    get,
    path = "/api/partners",
    tag = "search",
    responses(
        (status = 200, description = "Partner ids and the no-selection sentinel", body = ApiResponse<PartnersResponse>)
    )
)]
pub async fn list_partners(State(state): State<AppState>) -> Json<ApiResponse<PartnersResponse>> {
    let response = PartnersResponse {
        none_value: NO_PARTNER_SELECTED.to_string(),
        partner_ids: state.config.partners.ids().to_vec(),
    };
    Json(ApiResponse::success(response))
}
