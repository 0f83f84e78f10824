//! Service layer for the donation-matching client.
//! - `auth`: the single active session and its persistence.
//! - `directory`: read-only organization catalog with filter and ranking.
//! - `location`: user position with timeout and fallback.
//! - `review`: recipient-side request handling with validated status changes.

pub mod errors;
pub mod auth;
pub mod directory;
pub mod location;
pub mod review;
pub mod runtime;
pub mod storage;
