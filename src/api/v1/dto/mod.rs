pub mod auth_configs;
