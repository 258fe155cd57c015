//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Smallest accepted line limit; anything lower cannot carry a login.
pub const MIN_LINE_LEN: usize = 16;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("history.capacity must be at least 1")]
    HistoryCapacity,
    #[error("limits.max_line_len must be at least 16, got {0}")]
    LineLimitTooSmall(usize),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.history.capacity == 0 {
        errors.push(ValidationError::HistoryCapacity);
    }

    if config.limits.max_line_len < MIN_LINE_LEN {
        errors.push(ValidationError::LineLimitTooSmall(
            config.limits.max_line_len,
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
