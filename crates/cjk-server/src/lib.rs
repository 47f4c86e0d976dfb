//! CJK formatter HTTP API server (Axum).
//!
//! Exposes the formatting pipeline and the word counter as JSON endpoints,
//! plus a health probe.

pub mod error;
pub mod routes;
pub mod state;

use axum::{extract::DefaultBodyLimit, Router};
use cjk_core::ServiceConfig;
use state::AppState;

/// Build the application router with default settings.
pub fn app() -> Router {
    app_with_state(AppState::new(ServiceConfig::default()))
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    // JSON escaping can inflate the body well past the text it carries.
    let body_limit = state.max_input_bytes().saturating_mul(6).max(64 * 1024);
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::format_routes())
        .merge(routes::count_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests;
