/*
 * Responsibility
 * - 認証設定の request/response DTO
 * - request body 自体は services::auth_config::AuthConfigRequest をそのまま受ける
 * - response では clientSecret を返さない (hasClientSecret のみ)
 */
use serde::{Deserialize, Serialize};

use crate::services::auth_config::AuthConfig;

#[derive(Debug, Deserialize)]
pub struct CreateAuthConfigQuery {
    #[serde(default = "enabled_by_default")]
    pub enable: bool,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfigResponse {
    pub id: Option<String>,
    pub auth_type: &'static str,
    pub source: &'static str,
    pub source_name: &'static str,
    pub enable: bool,
    pub enable_register: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub has_client_secret: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Authorize url with `{redirectUri}` and `{state}` still unresolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorize_url: Option<String>,
}

impl From<&AuthConfig> for AuthConfigResponse {
    fn from(config: &AuthConfig) -> Self {
        let common = config.common();
        let (base_url, realm, scope) = match config {
            AuthConfig::Ory(c) => (c.base_url.clone(), None, c.scope.clone()),
            AuthConfig::Keycloak(c) => (c.base_url.clone(), c.realm.clone(), c.scope.clone()),
            AuthConfig::Email(_) | AuthConfig::Oauth2Simple(_) => (None, None, None),
        };

        Self {
            id: common.id.clone(),
            auth_type: common.auth_type.as_str(),
            source: common.source,
            source_name: common.source_name,
            enable: common.enable,
            enable_register: common.enable_register,
            client_id: config.client_id().map(str::to_string),
            has_client_secret: config
                .oauth2()
                .is_some_and(|c| c.client_secret.is_some()),
            base_url,
            realm,
            scope,
            // An incomplete template is not an error here; the login flow reports it.
            authorize_url: config.authorize_url().ok().flatten(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTypesResponse {
    pub auth_types: Vec<&'static str>,
}
