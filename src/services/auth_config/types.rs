/*
 * Responsibility
 * - ログイン方式のタグ (FORM / GITHUB / ...) と source / source name の対応表
 * - タグ文字列との変換はここに閉じ込める
 */
use std::fmt;
use std::str::FromStr;

use super::error::AuthConfigError;
use super::placeholder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuthType {
    Form,
    Github,
    Google,
    Ory,
    Keycloak,
}

impl AuthType {
    pub const ALL: [AuthType; 5] = [
        AuthType::Form,
        AuthType::Github,
        AuthType::Google,
        AuthType::Ory,
        AuthType::Keycloak,
    ];

    /// Wire tag, matched exactly (case-sensitive).
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Form => "FORM",
            AuthType::Github => "GITHUB",
            AuthType::Google => "GOOGLE",
            AuthType::Ory => "ORY",
            AuthType::Keycloak => "KEYCLOAK",
        }
    }

    /// Identifier of the identity provider behind this login method.
    pub fn source(&self) -> &'static str {
        match self {
            AuthType::Form => "EMAIL",
            AuthType::Github => "GITHUB",
            AuthType::Google => "GOOGLE",
            AuthType::Ory => "ORY",
            AuthType::Keycloak => "KEYCLOAK",
        }
    }

    pub fn source_name(&self) -> &'static str {
        match self {
            AuthType::Form => "EMAIL",
            AuthType::Github => "Github",
            AuthType::Google => "Google",
            AuthType::Ory => "Ory",
            AuthType::Keycloak => "Keycloak",
        }
    }

    pub fn is_oauth2(&self) -> bool {
        !matches!(self, AuthType::Form)
    }

    /// Built-in authorize url template; `None` for form login.
    pub fn authorize_url_template(&self) -> Option<&'static str> {
        match self {
            AuthType::Form => None,
            AuthType::Github => Some(placeholder::GITHUB_AUTHORIZE_URL),
            AuthType::Google => Some(placeholder::GOOGLE_AUTHORIZE_URL),
            AuthType::Ory => Some(placeholder::ORY_AUTHORIZE_URL),
            AuthType::Keycloak => Some(placeholder::KEYCLOAK_AUTHORIZE_URL),
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = AuthConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AuthConfigError::UnsupportedAuthType(s.to_string()))
    }
}
