//! Infrastructure layer implementing the domain storage contract.
//!
//! - [`persistence`] - PostgreSQL and in-memory tutorial repositories

pub mod persistence;
