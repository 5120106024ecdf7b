pub mod config;
pub mod routes_filter;
pub mod routes_strings;
pub mod state;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use state::SharedState;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/strings", post(routes_strings::create_string))
        .route("/strings", get(routes_strings::list_strings))
        .route(
            "/strings/filter-by-natural-language",
            get(routes_filter::filter_by_natural_language),
        )
        .route("/strings/:value", get(routes_strings::get_string))
        .route("/strings/:value", delete(routes_strings::delete_string))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the String Analyzer API!",
        "endpoints": [
            "/strings",
            "/strings/{value}",
            "/strings/filter-by-natural-language",
        ]
    }))
}
