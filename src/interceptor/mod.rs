//! Request path interception.
//!
//! # Responsibilities
//! - Own the compiled rule list for one gatekeeper instance
//! - Evaluate a request path against the rules, first match wins
//! - Decide between blocking with a status and forwarding untouched
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - Matching is an unanchored search; anchoring is up to the pattern
//! - No path normalization; the caller supplies the escaped path
//! - Forwarding leaves no trace: no headers, no log events

use crate::config::BlockPathConfig;
use crate::rules::{compile, lookup_status_message, CompiledRule, Rule, RuleError};

/// Outcome of evaluating a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Reject the request with this status and optional body.
    Block {
        status_code: u32,
        body: Option<&'static str>,
    },
    /// Hand the request to the next stage unchanged.
    Forward,
}

impl Decision {
    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }
}

/// Evaluates request paths against an ordered rule list.
#[derive(Debug)]
pub struct Interceptor {
    name: String,
    rules: Vec<CompiledRule>,
}

impl Interceptor {
    /// Compile `rules` into a new interceptor.
    pub fn new(rules: &[Rule], name: impl Into<String>) -> Result<Self, RuleError> {
        let rules = compile(rules)?;
        let name = name.into();

        tracing::info!(name = %name, rules = rules.len(), "Path rules compiled");

        Ok(Self { name, rules })
    }

    /// Build from a plugin configuration block.
    pub fn from_config(
        config: &BlockPathConfig,
        name: impl Into<String>,
    ) -> Result<Self, RuleError> {
        Self::new(&config.elements, name)
    }

    /// Decide what to do with a request for `path`.
    pub fn handle(&self, path: &str) -> Decision {
        match self.rules.iter().find(|rule| rule.matches(path)) {
            Some(rule) => {
                let status_code = rule.status_code();
                Decision::Block {
                    status_code,
                    body: lookup_status_message(status_code).ok(),
                }
            }
            None => Decision::Forward,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }
}
