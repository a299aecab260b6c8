//! Application services orchestrating configuration loading.
pub mod config;

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to open config file")]
    Io(#[source] std::io::Error),
    #[error("failed to decode config file")]
    Decode(#[source] serde_json::Error),
}
