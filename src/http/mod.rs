//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → layer.rs / middleware.rs (ask the Interceptor about the path)
//!     → Block: response.rs (status + optional body), next stage never runs
//!     → Forward: next stage receives the untouched request
//! ```
//!
//! `server.rs` wires the gate in front of an echo application for the
//! standalone binary.

pub mod layer;
pub mod middleware;
pub mod response;
pub mod server;

pub use layer::{BlockPath, BlockPathLayer};
pub use middleware::block_path_middleware;
pub use server::HttpServer;
