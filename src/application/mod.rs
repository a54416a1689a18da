//! Application layer orchestrating domain operations.
//!
//! - [`services`] - Business services consumed by HTTP handlers and the admin CLI

pub mod services;
