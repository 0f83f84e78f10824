//! Shared runtime helpers: logging bootstrap and environment checks.

pub mod utils;
pub mod env;
