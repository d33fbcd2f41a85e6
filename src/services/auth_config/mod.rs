pub mod error;
pub mod factory;
pub mod model;
pub mod placeholder;
pub mod request;
pub mod types;

pub use error::AuthConfigError;
pub use factory::{build_auth_config, supported_auth_types};
pub use model::{
    AuthConfig, AuthConfigCommon, EmailAuthConfig, Oauth2KeycloakAuthConfig, Oauth2OryAuthConfig,
    Oauth2SimpleAuthConfig,
};
pub use request::AuthConfigRequest;
pub use types::AuthType;
