use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use records::{AnalyzedRecord, RawFilterParams, StringFilter};

use crate::state::SharedState;

#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}

pub(crate) fn err(status: StatusCode, msg: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (status, Json(ApiError { error: msg.into() }))
}

#[derive(Serialize)]
pub struct ListResponse {
    pub data: Vec<AnalyzedRecord>,
    pub count: usize,
    pub filters_applied: StringFilter,
}

/// POST /strings
///
/// Missing "value" field is 400, a non-string "value" is 422, an already
/// stored string is 409.
pub async fn create_string(
    State(state): State<SharedState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<AnalyzedRecord>), (StatusCode, Json<ApiError>)> {
    let Some(raw) = body.get("value") else {
        return Err(err(StatusCode::BAD_REQUEST, "\"value\" field is required."));
    };
    let Some(text) = raw.as_str() else {
        return Err(err(
            StatusCode::UNPROCESSABLE_ENTITY,
            "\"value\" must be a string.",
        ));
    };

    // Insert's only failure mode is a duplicate value
    let record = state
        .store
        .insert(text)
        .map_err(|e| err(StatusCode::CONFLICT, e.to_string()))?;

    tracing::info!(
        id = %record.fingerprint,
        length = record.properties.length,
        "string created"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings?is_palindrome=&min_length=&max_length=&word_count=&contains_character=
pub async fn list_strings(
    State(state): State<SharedState>,
    Query(raw): Query<RawFilterParams>,
) -> Result<Json<ListResponse>, (StatusCode, Json<ApiError>)> {
    let filter =
        StringFilter::from_raw(&raw).map_err(|e| err(StatusCode::BAD_REQUEST, e.to_string()))?;

    let data = state.store.list(&filter);

    Ok(Json(ListResponse {
        count: data.len(),
        data,
        filters_applied: filter,
    }))
}

/// GET /strings/:value (axum URL-decodes the path segment)
pub async fn get_string(
    State(state): State<SharedState>,
    Path(value): Path<String>,
) -> Result<Json<AnalyzedRecord>, (StatusCode, Json<ApiError>)> {
    let record = state
        .store
        .get(&value)
        .map_err(|e| err(StatusCode::NOT_FOUND, e.to_string()))?;

    Ok(Json(record))
}

/// DELETE /strings/:value
pub async fn delete_string(
    State(state): State<SharedState>,
    Path(value): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    state
        .store
        .delete(&value)
        .map_err(|e| err(StatusCode::NOT_FOUND, e.to_string()))?;

    tracing::info!("string deleted");

    Ok(StatusCode::NO_CONTENT)
}
