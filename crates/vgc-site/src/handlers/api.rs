//! JSON API Handlers

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::state::AppState;

const NO_STORE: &str = "no-store, no-cache, must-revalidate";

/// Handler for `/api/config`: the CMS settings, never cached.
pub async fn config(State(state): State<AppState>) -> Response {
    let (status, body) = match state.cms().settings().await {
        Ok(settings) => (StatusCode::OK, json!({ "success": true, "data": &*settings })),
        Err(err) => {
            warn!(error = %err, "settings passthrough failed");
            (
                StatusCode::BAD_GATEWAY,
                json!({ "success": false, "message": "settings are currently unavailable" }),
            )
        }
    };

    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
    response
}
