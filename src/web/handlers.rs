use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use super::types::{GenerateRequest, GenerateResponse};
use crate::app::{App, GenerationState};
use crate::models::GenerationOptions;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub type SharedState = Arc<App>;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn generate(
    State(app): State<SharedState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> (StatusCode, Json<GenerateResponse>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("Rejected generate request: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(GenerateResponse::rejected(&rejection.body_text())),
            );
        }
    };

    let options = GenerationOptions::from_parts(req.steps, req.guidance_scale);
    let outcome = app.handle(&req.prompt, options).await;

    let code = match outcome.state {
        GenerationState::Done => StatusCode::OK,
        _ if outcome.is_empty_prompt() => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    };

    (code, Json(outcome.into()))
}
