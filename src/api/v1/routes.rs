/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /auth-configs を nest/merge
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    auth_configs::{create_auth_config, list_auth_types},
    health::health,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/auth-configs", post(create_auth_config))
        .route("/auth-configs/types", get(list_auth_types))
}
