/*
 * Responsibility
 * - /auth-configs 系 handler
 * - Json を extractor で受け、factory で型付きの設定に変換して返す
 * - 永続化はしない (保存は呼び出し側の責務)
 */
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::info;

use crate::{
    api::v1::dto::auth_configs::{AuthConfigResponse, AuthTypesResponse, CreateAuthConfigQuery},
    error::AppError,
    services::auth_config::{self, AuthConfigRequest},
    state::AppState,
};

pub async fn create_auth_config(
    State(_state): State<AppState>,
    Query(query): Query<CreateAuthConfigQuery>,
    Json(req): Json<AuthConfigRequest>,
) -> Result<(StatusCode, Json<AuthConfigResponse>), AppError> {
    let config = auth_config::build_auth_config(&req, query.enable)?;

    info!(
        auth_type = %config.auth_type(),
        source = config.source(),
        enable = query.enable,
        "auth config accepted"
    );

    Ok((StatusCode::CREATED, Json(AuthConfigResponse::from(&config))))
}

pub async fn list_auth_types() -> Json<AuthTypesResponse> {
    Json(AuthTypesResponse {
        auth_types: auth_config::supported_auth_types().into_iter().collect(),
    })
}
