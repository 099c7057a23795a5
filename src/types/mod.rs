//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod query;

pub use query::*;
