use thiserror::Error;

/// Failures surfaced while turning an admin request into an [`AuthConfig`].
///
/// [`AuthConfig`]: super::AuthConfig
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthConfigError {
    #[error("clientId can not be null.")]
    MissingClientId,

    /// Carries the tag exactly as it was received.
    #[error("unsupported auth type: {0}")]
    UnsupportedAuthType(String),

    #[error("{0} is required by the authorize url template")]
    MissingUrlParameter(&'static str),
}
