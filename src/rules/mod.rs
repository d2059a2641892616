//! Rule compilation subsystem.
//!
//! # Data Flow
//! ```text
//! Rule[] (pattern + optional status code, from config)
//!     → compiler.rs (compile regex, default status to 401)
//!     → CompiledRule[] (ordered, immutable)
//!     → owned by exactly one Interceptor
//!
//! On block decision:
//!     status.rs (code → optional response body)
//! ```
//!
//! # Design Decisions
//! - Fail fast: the first malformed pattern aborts compilation
//! - Input order is preserved and used as match priority
//! - Status codes are not checked against the HTTP registry

pub mod compiler;
pub mod status;

pub use compiler::{compile, CompiledRule, Rule, RuleError, DEFAULT_STATUS_CODE};
pub use status::{lookup_status_message, UnknownStatusMessage};
