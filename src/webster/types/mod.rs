//! Foundational data structures, error types and reader options.

pub mod error;
pub mod models;
