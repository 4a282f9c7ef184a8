//! Request handlers. Bodies are JSON; a missing `session_id` defaults to
//! `"default"`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use cloak_core::errors::{CloakError, CloakResult};
use cloak_core::traits::Vault;

use super::error::ApiError;
use super::AppState;

fn default_session() -> String {
    "default".to_string()
}

#[derive(Deserialize)]
pub struct RedactRequest {
    #[serde(default = "default_session")]
    session_id: String,
    messages: Vec<Value>,
}

#[derive(Deserialize)]
pub struct TextRequest {
    #[serde(default = "default_session")]
    session_id: String,
    text: String,
}

#[derive(Deserialize)]
pub struct ClearRequest {
    #[serde(default = "default_session")]
    session_id: String,
}

type Body<T> = Result<Json<T>, JsonRejection>;

fn accept<T>(payload: Body<T>) -> Result<T, ApiError> {
    payload
        .map(|Json(inner)| inner)
        .map_err(|rejection| CloakError::invalid_input(rejection.body_text()).into())
}

/// Run a vault-touching closure on the blocking pool. The closure runs to
/// completion even if the client disconnects, so no partial vault state
/// can leak.
async fn run_blocking<T, F>(f: F) -> CloakResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> CloakResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CloakError::protocol(format!("worker task failed: {e}")))?
}

pub async fn redact(
    State(state): State<AppState>,
    payload: Body<RedactRequest>,
) -> Result<Json<Value>, ApiError> {
    let req = accept(payload)?;
    let messages = run_blocking(move || {
        cloak_engine::redact_messages(
            &state.redactor,
            state.vault.as_ref(),
            &req.session_id,
            req.messages,
        )
    })
    .await?;
    Ok(Json(json!({ "messages": messages })))
}

pub async fn redact_text(
    State(state): State<AppState>,
    payload: Body<TextRequest>,
) -> Result<Json<Value>, ApiError> {
    let req = accept(payload)?;
    let result = run_blocking(move || {
        state
            .redactor
            .redact(state.vault.as_ref(), &req.session_id, &req.text)
    })
    .await?;
    Ok(Json(json!({
        "text": result.text,
        "entities": result.entities,
        "token_count": result.token_count,
    })))
}

pub async fn rehydrate(
    State(state): State<AppState>,
    payload: Body<TextRequest>,
) -> Result<Json<Value>, ApiError> {
    let req = accept(payload)?;
    let text =
        run_blocking(move || state.vault.rehydrate(&req.session_id, &req.text)).await?;
    Ok(Json(json!({ "text": text })))
}

pub async fn clear(
    State(state): State<AppState>,
    payload: Body<ClearRequest>,
) -> Result<Json<Value>, ApiError> {
    let req = accept(payload)?;
    run_blocking(move || state.vault.delete_session(&req.session_id)).await?;
    Ok(Json(json!({ "status": "cleared" })))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "presidio": state.redactor.ner_available(),
        "backend": state.vault.backend_name(),
    }))
}

pub async fn sessions(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let sessions = run_blocking(move || state.vault.list_sessions()).await?;
    Ok(Json(json!({ "sessions": sessions })))
}
