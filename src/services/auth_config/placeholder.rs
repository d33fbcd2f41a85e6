//! Authorize url templates and the literal token replacement applied to them.
//!
//! Replacement is plain substring replacement, not templating: nothing is escaped,
//! and tokens are applied in a fixed order so a value containing a later token is
//! itself rewritten by that later step.

use super::error::AuthConfigError;

pub const CLIENT_ID_PLACEHOLDER: &str = "{clientId}";
pub const BASE_URL_PLACEHOLDER: &str = "{baseUrl}";
pub const REALM_PLACEHOLDER: &str = "{realm}";
pub const SCOPE_PLACEHOLDER: &str = "{scope}";
// Filled by the login flow at redirect time, never by a stored config.
pub const REDIRECT_URI_PLACEHOLDER: &str = "{redirectUri}";
pub const STATE_PLACEHOLDER: &str = "{state}";

pub const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize?response_type=code&client_id={clientId}&redirect_uri={redirectUri}&state={state}&scope=user:email%20read:user";
pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth?response_type=code&client_id={clientId}&redirect_uri={redirectUri}&state={state}&scope=openid%20email%20profile&prompt=select_account&access_type=offline";
pub const ORY_AUTHORIZE_URL: &str = "{baseUrl}/oauth2/auth?response_type=code&client_id={clientId}&redirect_uri={redirectUri}&state={state}&scope={scope}";
pub const KEYCLOAK_AUTHORIZE_URL: &str = "{baseUrl}/realms/{realm}/protocol/openid-connect/auth?response_type=code&client_id={clientId}&redirect_uri={redirectUri}&state={state}&scope={scope}";

/// Shared first step for every OAuth2 config.
pub fn replace_client_id(url: &str, client_id: &str) -> String {
    url.replace(CLIENT_ID_PLACEHOLDER, client_id)
}

/// Replace `token` with an optional config value.
///
/// A template that never mentions `token` is returned as is even when the value is
/// missing; one that does mention it fails with [`AuthConfigError::MissingUrlParameter`].
pub fn replace_optional(
    url: String,
    token: &str,
    field: &'static str,
    value: Option<&str>,
) -> Result<String, AuthConfigError> {
    if !url.contains(token) {
        return Ok(url);
    }
    let value = value.ok_or(AuthConfigError::MissingUrlParameter(field))?;
    Ok(url.replace(token, value))
}
