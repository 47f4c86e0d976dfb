//! Route handlers: health, format, count.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use cjk_core::{ensure_within_limit, RuleConfig};
use cjk_counter::{count, render, DisplayMode};
use cjk_formatter::FormatterPipeline;
use serde::Deserialize;
use serde_json::{json, Value};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn format_routes() -> Router<AppState> {
    Router::new().route("/api/v1/format", post(format_text))
}

pub fn count_routes() -> Router<AppState> {
    Router::new().route("/api/v1/count", post(count_text))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub text: String,
    #[serde(default)]
    pub config: Option<Value>,
}

async fn format_text(
    State(state): State<AppState>,
    Json(req): Json<FormatRequest>,
) -> Result<Json<Value>, ApiError> {
    check_size(&state, &req.text)?;
    let config = req
        .config
        .as_ref()
        .map(RuleConfig::from_value)
        .unwrap_or_default();
    let result = FormatterPipeline::new(config).format(&req.text);
    tracing::info!(
        bytes = result.original_len,
        changed = result.changed(),
        rules = result.rules_applied.len(),
        "format request"
    );
    Ok(Json(json!({
        "text": result.output,
        "changed": result.changed(),
        "rules_applied": result.rules_applied,
    })))
}

#[derive(Debug, Deserialize)]
pub struct CountRequest {
    pub text: String,
    #[serde(default)]
    pub mode: Option<String>,
}

async fn count_text(
    State(state): State<AppState>,
    Json(req): Json<CountRequest>,
) -> Result<Json<Value>, ApiError> {
    let mode = match req.mode.as_deref() {
        Some(raw) => raw.parse::<DisplayMode>()?,
        None => DisplayMode::default(),
    };
    check_size(&state, &req.text)?;
    let result = count(&req.text);
    tracing::info!(bytes = req.text.len(), total = result.total, %mode, "count request");
    Ok(Json(json!({
        "cjk": result.cjk,
        "english": result.english,
        "total": result.total,
        "chars": result.chars,
        "display": render(&result, mode),
    })))
}

fn check_size(state: &AppState, text: &str) -> Result<(), ApiError> {
    ensure_within_limit(text, state.max_input_bytes()).map_err(|e| {
        tracing::warn!(bytes = text.len(), limit = state.max_input_bytes(), "rejected oversized input");
        ApiError::from(e)
    })
}
