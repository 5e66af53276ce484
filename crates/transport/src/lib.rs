// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin `axum` binding from HTTP handlers to [`Router`] methods.
//!
//! This crate owns no pool state and makes no routing decisions of its own:
//! every handler extracts a request, calls the matching `Router` method, and
//! maps the `Result<T, EnvError>` into an HTTP response. Status-code mapping
//! for every error kind lives in one place — the `IntoResponse` impl below —
//! so a handler can't forget to translate a new error kind correctly.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as AxumResponse};
use axum::routing::{get, post};
use axum::{Json, Router as AxumRouter};
use envpool_core::{EnvError, EnvId, ResetOptions};
use envpool_router::Router;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Build the `axum` app around an already-started [`Router`].
pub fn app(router: Router) -> AxumRouter {
    AxumRouter::new()
        .route("/health", get(health))
        .route("/create", post(create))
        .route("/step/:env_id", post(step))
        .route("/reset/:env_id", post(reset))
        .route("/close/:env_id", post(close))
        .with_state(router)
}

#[derive(Debug, Serialize)]
struct CreateResponse {
    env_id: u64,
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn create(State(router): State<Router>) -> Result<Json<CreateResponse>, EnvErrorResponse> {
    let env_id = router.create().await?;
    Ok(Json(CreateResponse { env_id: env_id.get() }))
}

#[derive(Debug, Deserialize)]
struct StepRequest {
    action: String,
}

async fn step(
    State(router): State<Router>,
    Path(env_id): Path<u64>,
    Json(body): Json<StepRequest>,
) -> Result<Json<Value>, EnvErrorResponse> {
    let payload = router.step(EnvId::new(env_id), body.action).await?;
    Ok(Json(serde_json::to_value(payload).unwrap_or(Value::Null)))
}

async fn reset(
    State(router): State<Router>,
    Path(env_id): Path<u64>,
    Json(options): Json<ResetOptions>,
) -> Result<Json<Value>, EnvErrorResponse> {
    let observation = router.reset(EnvId::new(env_id), options).await?;
    Ok(Json(observation))
}

async fn close(
    State(router): State<Router>,
    Path(env_id): Path<u64>,
) -> Result<Json<Value>, EnvErrorResponse> {
    let closed = router.close(EnvId::new(env_id)).await?;
    Ok(Json(serde_json::json!(closed)))
}

/// Wraps [`EnvError`] so it can be returned directly from a handler via `?`
/// and rendered through the shared `IntoResponse` impl below.
struct EnvErrorResponse(EnvError);

impl From<EnvError> for EnvErrorResponse {
    fn from(err: EnvError) -> Self {
        Self(err)
    }
}

impl IntoResponse for EnvErrorResponse {
    fn into_response(self) -> AxumResponse {
        let err = self.0;
        let status = StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(serde_json::json!({
            "error": {
                "code": err.code(),
                "message": err.message,
                "retryable": err.retryable(),
                "details": Value::Null,
            }
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
