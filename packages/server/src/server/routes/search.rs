use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::search::{self, BillSearchResult};
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<BillSearchResult>,
}

/// Bill search page model. A blank query returns no results rather
/// than erroring.
pub async fn search_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, StatusCode> {
    let query = params.q.trim().to_string();

    let results = if query.is_empty() {
        Vec::new()
    } else {
        search::search_bills(&query, &state.db_pool)
            .await
            .map_err(|e| {
                tracing::error!("Search failed: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
    };

    Ok(Json(SearchResults { query, results }))
}
