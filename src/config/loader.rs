//! Configuration loading from the process environment.

use crate::config::schema::{ShimConfig, DEFAULT_LISTEN_PORT};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the listen port.
pub const LISTEN_PORT_VAR: &str = "LISTEN_PORT";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process environment.
pub fn load_from_env() -> Result<ShimConfig, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` to resolve environment variables.
///
/// An unset or empty variable falls back to its default.
pub fn load_with<F>(lookup: F) -> Result<ShimConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ShimConfig::default();

    config.listener.port = match lookup(LISTEN_PORT_VAR).filter(|v| !v.is_empty()) {
        Some(value) => value.trim().parse::<u16>().map_err(|source| ConfigError::InvalidPort {
            var: LISTEN_PORT_VAR,
            value: value.clone(),
            source,
        })?,
        None => DEFAULT_LISTEN_PORT,
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
