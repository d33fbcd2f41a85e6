//! Factory: build a typed `AuthConfig` from an admin `AuthConfigRequest`.
use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::error::AuthConfigError;
use super::model::{
    AuthConfig, AuthConfigCommon, EmailAuthConfig, Oauth2KeycloakAuthConfig, Oauth2OryAuthConfig,
    Oauth2SimpleAuthConfig,
};
use super::request::AuthConfigRequest;
use super::types::AuthType;

pub fn build_auth_config(
    request: &AuthConfigRequest,
    enable: bool,
) -> Result<AuthConfig, AuthConfigError> {
    let auth_type = request.auth_type.parse::<AuthType>().inspect_err(|_| {
        warn!(auth_type = %request.auth_type, "unsupported auth type");
    })?;

    let config = match auth_type {
        AuthType::Form => AuthConfig::Email(build_email(request, enable)),
        AuthType::Github | AuthType::Google => {
            AuthConfig::Oauth2Simple(build_oauth2_simple(auth_type, request, enable)?)
        }
        AuthType::Ory => AuthConfig::Ory(Oauth2OryAuthConfig {
            oauth2: build_oauth2_simple(auth_type, request, enable)?,
            base_url: request.get_string("baseUrl"),
            scope: request.get_string("scope"),
        }),
        AuthType::Keycloak => AuthConfig::Keycloak(Oauth2KeycloakAuthConfig {
            oauth2: build_oauth2_simple(auth_type, request, enable)?,
            base_url: request.get_string("baseUrl"),
            realm: request.get_string("realm"),
            scope: request.get_string("scope"),
        }),
    };

    debug!(
        auth_type = %auth_type,
        id = ?config.common().id,
        enable,
        "auth config built"
    );
    Ok(config)
}

pub fn supported_auth_types() -> BTreeSet<&'static str> {
    AuthType::ALL.iter().map(AuthType::as_str).collect()
}

fn build_email(request: &AuthConfigRequest, enable: bool) -> EmailAuthConfig {
    EmailAuthConfig {
        common: AuthConfigCommon::new(
            AuthType::Form,
            request.id.clone(),
            enable,
            request.enable_register(),
        ),
    }
}

fn build_oauth2_simple(
    auth_type: AuthType,
    request: &AuthConfigRequest,
    enable: bool,
) -> Result<Oauth2SimpleAuthConfig, AuthConfigError> {
    let client_id = request.client_id.clone().ok_or_else(|| {
        warn!(auth_type = %auth_type, "auth config without clientId");
        AuthConfigError::MissingClientId
    })?;

    Ok(Oauth2SimpleAuthConfig {
        common: AuthConfigCommon::new(
            auth_type,
            request.id.clone(),
            enable,
            request.enable_register(),
        ),
        client_id,
        client_secret: request.client_secret.clone(),
    })
}
