//! Rule definitions and compilation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status emitted when a rule leaves its code unset (or sets it to zero).
pub const DEFAULT_STATUS_CODE: u32 = 401;

/// A blocking rule as configured by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
    /// Regular expression searched for anywhere in the request path.
    #[serde(rename = "regex", default)]
    pub pattern: String,

    /// Status to respond with on match. `None` and `0` both mean 401.
    #[serde(rename = "code", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u32>,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, status_code: Option<u32>) -> Self {
        Self {
            pattern: pattern.into(),
            status_code,
        }
    }

    /// Status code after defaulting.
    pub fn effective_status(&self) -> u32 {
        match self.status_code {
            None | Some(0) => DEFAULT_STATUS_CODE,
            Some(code) => code,
        }
    }
}

/// Errors raised while compiling rules.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A configured pattern is not a valid regular expression.
    #[error("error compiling regex {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A rule ready for evaluation.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    matcher: Regex,
    status_code: u32,
}

impl CompiledRule {
    /// Compile a single rule.
    pub fn new(rule: &Rule) -> Result<Self, RuleError> {
        let matcher = Regex::new(&rule.pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: rule.pattern.clone(),
            source,
        })?;

        Ok(Self {
            matcher,
            status_code: rule.effective_status(),
        })
    }

    /// Returns true if the pattern matches anywhere within `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    pub fn status_code(&self) -> u32 {
        self.status_code
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }
}

/// Compile rules in order, stopping at the first invalid pattern.
pub fn compile(rules: &[Rule]) -> Result<Vec<CompiledRule>, RuleError> {
    rules.iter().map(CompiledRule::new).collect()
}
