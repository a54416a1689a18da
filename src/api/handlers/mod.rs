//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod tutorials;

pub use health::{health_handler, welcome_handler};
pub use tutorials::{
    create_tutorial_handler, delete_all_tutorials_handler, delete_tutorial_handler,
    get_tutorial_handler, list_tutorials_handler, update_tutorial_handler,
};
