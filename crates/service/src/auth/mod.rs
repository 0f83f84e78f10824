//! Session lifecycle: three layers (domain, backend, service).
//!
//! The backend verifies identities; the service owns the single active
//! session and mirrors it into durable storage.

pub mod domain;
pub mod errors;
pub mod ids;
pub mod repository;
pub mod service;

pub use errors::AuthError;
pub use repository::{AuthBackend, roster::RosterAuthBackend};
pub use service::{SessionConfig, SessionService};
