//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Opaque record id generation

pub mod id_generator;
