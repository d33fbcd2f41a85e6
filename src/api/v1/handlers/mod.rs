pub mod auth_configs;
pub mod health;
