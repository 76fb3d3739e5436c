use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::warn;

use super::service::{ScorecardRequest, ScorecardService};

pub const TOKEN_HEADER: &str = "x-scorecard-token";

/// Shared handler state: the service plus the optional shared secret.
#[derive(Clone)]
pub struct ScorecardState {
    pub service: Arc<ScorecardService>,
    pub api_token: Option<Arc<str>>,
}

impl ScorecardState {
    pub fn new(service: Arc<ScorecardService>, api_token: Option<String>) -> Self {
        Self {
            service,
            api_token: api_token.map(Arc::from),
        }
    }
}

/// Router builder exposing the scorecard endpoint. Non-POST methods receive 405.
pub fn scorecard_router(state: ScorecardState) -> Router {
    Router::new()
        .route("/api/v1/scorecard", post(score_handler))
        .with_state(state)
}

/// Token check runs before any shape check, so unauthenticated callers only
/// ever see 401.
pub(crate) async fn score_handler(
    State(state): State<ScorecardState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let parsed = serde_json::from_slice::<Value>(&body);

    if let Some(expected) = state.api_token.as_deref() {
        let body_token = parsed
            .as_ref()
            .ok()
            .and_then(|payload| payload.get("token"))
            .and_then(Value::as_str);
        if header_token(&headers).or(body_token) != Some(expected) {
            warn!("scorecard request rejected: missing or invalid token");
            let payload = json!({ "error": "unauthorized" });
            return (StatusCode::UNAUTHORIZED, Json(payload)).into_response();
        }
    }

    let payload = match parsed {
        Ok(payload) => payload,
        Err(error) => {
            warn!(%error, "scorecard request rejected: malformed JSON");
            let payload = json!({ "error": format!("request body is not valid JSON: {error}") });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let request = match ScorecardRequest::from_payload(&payload) {
        Ok(request) => request,
        Err(error) => {
            warn!(%error, "scorecard request rejected");
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match state.service.evaluate(request, Utc::now()) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

fn header_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    let custom = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim);

    bearer.or(custom)
}
