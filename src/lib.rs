pub mod domain;
pub mod models;
pub mod services;

/// Front-end server config file, relative to the process working directory.
/// See [`models::config::AppConfig`] for the fields description.
pub const CONFIG_FILE: &str = "config.json";
