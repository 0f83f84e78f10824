use async_trait::async_trait;
use models::Coordinates;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("permission to read location was denied")]
    PermissionDenied,
    #[error("position unavailable: {0}")]
    Unavailable(String),
    #[error("timed out waiting for a position")]
    Timeout,
}

/// Source of the device position.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Provider that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl GeolocationProvider for FixedPosition {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}
