/*
 * Responsibility
 * - Stand-in handlers for the pages behind the gate (/login, /register, /com-man/...)
 * - GET /health (not gated)
 *
 * Notes
 * - Rendering belongs to the surrounding application; these only report
 *   which page was reached.
 */
use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/login", get(login))
        .route("/register", get(register))
        .route("/com-man", get(dashboard_root))
        .route("/com-man/{*rest}", get(dashboard))
        .fallback(not_found)
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn login() -> impl IntoResponse {
    Json(json!({"page": "login"}))
}

async fn register() -> impl IntoResponse {
    Json(json!({"page": "register"}))
}

async fn dashboard_root() -> impl IntoResponse {
    Json(json!({"page": "com-man"}))
}

async fn dashboard(Path(rest): Path<String>) -> impl IntoResponse {
    Json(json!({"page": "com-man", "path": rest}))
}

async fn not_found() -> AppError {
    AppError::NotFound
}
