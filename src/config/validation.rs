//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address present)
//! - Compile every pattern so all malformed rules are reported together
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Status codes HTTP cannot send are logged, and rejected only in strict mode
//! - Runs before config is accepted into the system

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::rules::{CompiledRule, RuleError};

/// Status codes that fit on an HTTP status line.
pub const SENDABLE_STATUS: RangeInclusive<u32> = 100..=999;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address is empty")]
    EmptyBindAddress,

    #[error("timeouts.request_secs must be > 0")]
    ZeroRequestTimeout,

    #[error("rule {index} has invalid regex {pattern:?}: {reason}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        reason: String,
    },

    #[error("rule {index} has status {status}, which HTTP cannot send (blocked requests get 500)")]
    StatusOutOfRange { index: usize, status: u32 },
}

/// Rules whose effective status falls outside [`SENDABLE_STATUS`], as `(index, status)`.
pub fn unsendable_statuses(config: &ServerConfig) -> Vec<(usize, u32)> {
    config
        .blockpath
        .elements
        .iter()
        .enumerate()
        .map(|(index, rule)| (index, rule.effective_status()))
        .filter(|(_, status)| !SENDABLE_STATUS.contains(status))
        .collect()
}

/// Validate a loaded configuration. Unsendable status codes are only logged.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    validate(config, false)
}

/// Like [`validate_config`], but unsendable status codes are errors.
pub fn validate_config_strict(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    validate(config, true)
}

fn validate(config: &ServerConfig, strict: bool) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.trim().is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    for (index, rule) in config.blockpath.elements.iter().enumerate() {
        if let Err(RuleError::InvalidPattern { pattern, source }) = CompiledRule::new(rule) {
            errors.push(ValidationError::InvalidPattern {
                index,
                pattern,
                reason: source.to_string(),
            });
        }
    }

    for (index, status) in unsendable_statuses(config) {
        if strict {
            errors.push(ValidationError::StatusOutOfRange { index, status });
        } else {
            tracing::warn!(
                index,
                status,
                "Status code is outside the HTTP range; blocked requests will get 500"
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
