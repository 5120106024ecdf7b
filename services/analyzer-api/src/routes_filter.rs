use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use records::{AnalyzedRecord, StringFilter};

use crate::routes_strings::{err, ApiError};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct NlQuery {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct NlFilterResponse {
    pub data: Vec<AnalyzedRecord>,
    pub count: usize,
    /// The constraints the interpreter derived from the query,
    /// reported back for transparency
    pub interpreted_filters: StringFilter,
}

/// GET /strings/filter-by-natural-language?q=...
///
/// Unrecognized phrasing derives no constraints and matches everything;
/// only a missing or empty query is an error.
pub async fn filter_by_natural_language(
    State(state): State<SharedState>,
    Query(params): Query<NlQuery>,
) -> Result<Json<NlFilterResponse>, (StatusCode, Json<ApiError>)> {
    let query = params.q.unwrap_or_default();

    let filter = state
        .interpreter
        .interpret(&query)
        .map_err(|e| err(StatusCode::BAD_REQUEST, e.to_string()))?;

    tracing::debug!(query = %query, filters = ?filter, "interpreted natural-language query");

    let data = state.store.list(&filter);

    Ok(Json(NlFilterResponse {
        count: data.len(),
        data,
        interpreted_filters: filter,
    }))
}
