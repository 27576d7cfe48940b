//! Configuration validation.
//!
//! Returns every problem found, not just the first.

use crate::config::schema::ShimConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("version.{0} must not be empty")]
    EmptyVersionPath(&'static str),
}

/// Check a configuration for semantic problems.
pub fn validate_config(config: &ShimConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.version.shim_version_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyVersionPath("shim_version_path"));
    }
    if config.version.app_version_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyVersionPath("app_version_path"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ShimConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ShimConfig::default();
        config.timeouts.request_secs = 0;
        config.version.app_version_path = PathBuf::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroRequestTimeout,
                ValidationError::EmptyVersionPath("app_version_path"),
            ]
        );
    }
}
