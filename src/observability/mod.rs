//! Observability subsystem.
//!
//! Structured logging through `tracing`. The gate logs at construction and
//! on block decisions only; forwarded requests produce no events from it.

pub mod logging;

pub use logging::init_logging;
