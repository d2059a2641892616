//! Request path gatekeeper.
//!
//! Evaluates each request path against an ordered list of regex rules and
//! either answers with the first matching rule's status code or hands the
//! request to the next stage untouched.
//!
//! ```text
//! BlockPathConfig ─▶ rules::compile ─▶ Interceptor ─▶ Decision
//!                                          │
//!                          http::BlockPathLayer / block_path_middleware
//! ```

pub mod config;
pub mod http;
pub mod interceptor;
pub mod lifecycle;
pub mod observability;
pub mod rules;

pub use config::{BlockPathConfig, ServerConfig};
pub use http::{BlockPath, BlockPathLayer, HttpServer};
pub use interceptor::{Decision, Interceptor};
pub use lifecycle::Shutdown;
pub use rules::{Rule, RuleError};
