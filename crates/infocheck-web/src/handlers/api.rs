//! JSON endpoint over the gRPC-web search service.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use infocheck_common::{ClientError, SearchHit};

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    /// `null` when the search service has no hit for the query.
    pub hit: Option<SearchHit>,
}

/// Backend failures map to 502 with the error text in the body.
pub struct ApiError(ClientError);

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(err = %self.0, "search API call failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// GET /api/search?q=...&limit=...
pub async fn api_search(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let limit = params.limit.unwrap_or(state.config.backend.result_count);
    let hit = state.backend.search(&params.q, limit).await?;
    Ok(Json(SearchResponse {
        query: params.q,
        hit,
    }))
}
