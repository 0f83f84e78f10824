//! User location: an optional geolocation provider with a timeout and a
//! fixed fallback position.

pub mod provider;
pub mod service;

pub use provider::{FixedPosition, GeolocationProvider, LocationError};
pub use service::{LocationConfig, LocationService};
