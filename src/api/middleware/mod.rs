//! HTTP middleware for request processing.
//!
//! Provides cross-origin handling and observability middleware.

pub mod cors;
pub mod tracing;
