pub mod auth_config;
