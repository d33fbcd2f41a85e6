//! Typed authentication configurations, one variant per login method.
//!
//! OAuth2 variants embed [`Oauth2SimpleAuthConfig`] and run its placeholder
//! replacement before applying their own tokens.

use std::fmt;

use super::error::AuthConfigError;
use super::placeholder::{
    BASE_URL_PLACEHOLDER, REALM_PLACEHOLDER, SCOPE_PLACEHOLDER, replace_client_id,
    replace_optional,
};
use super::types::AuthType;

/// Fields every login method carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfigCommon {
    pub id: Option<String>,
    pub enable: bool,
    pub enable_register: bool,
    pub source: &'static str,
    pub source_name: &'static str,
    pub auth_type: AuthType,
}

impl AuthConfigCommon {
    pub fn new(auth_type: AuthType, id: Option<String>, enable: bool, enable_register: bool) -> Self {
        Self {
            id,
            enable,
            enable_register,
            source: auth_type.source(),
            source_name: auth_type.source_name(),
            auth_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAuthConfig {
    pub common: AuthConfigCommon,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Oauth2SimpleAuthConfig {
    pub common: AuthConfigCommon,
    pub client_id: String,
    pub client_secret: Option<String>,
}

impl Oauth2SimpleAuthConfig {
    pub fn replace_auth_url_placeholders(&self, url: &str) -> String {
        replace_client_id(url, &self.client_id)
    }
}

// Client secrets must not end up in logs.
impl fmt::Debug for Oauth2SimpleAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Oauth2SimpleAuthConfig")
            .field("common", &self.common)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oauth2OryAuthConfig {
    pub oauth2: Oauth2SimpleAuthConfig,
    pub base_url: Option<String>,
    pub scope: Option<String>,
}

impl Oauth2OryAuthConfig {
    pub fn replace_auth_url_placeholders(&self, url: &str) -> Result<String, AuthConfigError> {
        let url = self.oauth2.replace_auth_url_placeholders(url);
        let url = replace_optional(
            url,
            BASE_URL_PLACEHOLDER,
            "baseUrl",
            self.base_url.as_deref(),
        )?;
        replace_optional(url, SCOPE_PLACEHOLDER, "scope", self.scope.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oauth2KeycloakAuthConfig {
    pub oauth2: Oauth2SimpleAuthConfig,
    pub base_url: Option<String>,
    pub realm: Option<String>,
    pub scope: Option<String>,
}

impl Oauth2KeycloakAuthConfig {
    pub fn replace_auth_url_placeholders(&self, url: &str) -> Result<String, AuthConfigError> {
        let url = self.oauth2.replace_auth_url_placeholders(url);
        let url = replace_optional(
            url,
            BASE_URL_PLACEHOLDER,
            "baseUrl",
            self.base_url.as_deref(),
        )?;
        let url = replace_optional(url, REALM_PLACEHOLDER, "realm", self.realm.as_deref())?;
        replace_optional(url, SCOPE_PLACEHOLDER, "scope", self.scope.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthConfig {
    Email(EmailAuthConfig),
    /// GitHub and Google.
    Oauth2Simple(Oauth2SimpleAuthConfig),
    Ory(Oauth2OryAuthConfig),
    Keycloak(Oauth2KeycloakAuthConfig),
}

impl AuthConfig {
    pub fn common(&self) -> &AuthConfigCommon {
        match self {
            AuthConfig::Email(c) => &c.common,
            AuthConfig::Oauth2Simple(c) => &c.common,
            AuthConfig::Ory(c) => &c.oauth2.common,
            AuthConfig::Keycloak(c) => &c.oauth2.common,
        }
    }

    pub fn auth_type(&self) -> AuthType {
        self.common().auth_type
    }

    pub fn source(&self) -> &'static str {
        self.common().source
    }

    pub fn source_name(&self) -> &'static str {
        self.common().source_name
    }

    pub fn oauth2(&self) -> Option<&Oauth2SimpleAuthConfig> {
        match self {
            AuthConfig::Email(_) => None,
            AuthConfig::Oauth2Simple(c) => Some(c),
            AuthConfig::Ory(c) => Some(&c.oauth2),
            AuthConfig::Keycloak(c) => Some(&c.oauth2),
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.oauth2().map(|c| c.client_id.as_str())
    }

    /// Apply this config's placeholders to an arbitrary template.
    ///
    /// Form login has no placeholders, so the template comes back unchanged.
    pub fn replace_auth_url_placeholders(&self, url: &str) -> Result<String, AuthConfigError> {
        match self {
            AuthConfig::Email(_) => Ok(url.to_string()),
            AuthConfig::Oauth2Simple(c) => Ok(c.replace_auth_url_placeholders(url)),
            AuthConfig::Ory(c) => c.replace_auth_url_placeholders(url),
            AuthConfig::Keycloak(c) => c.replace_auth_url_placeholders(url),
        }
    }

    /// The built-in authorize url with config values filled in. `{redirectUri}` and
    /// `{state}` are left for the login flow.
    pub fn authorize_url(&self) -> Result<Option<String>, AuthConfigError> {
        self.auth_type()
            .authorize_url_template()
            .map(|template| self.replace_auth_url_placeholders(template))
            .transpose()
    }
}
