use std::sync::Arc;
use std::time::Duration;

use models::Coordinates;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::provider::{GeolocationProvider, LocationError};
use crate::errors::ServiceError;
use crate::storage::kv_store::{keys, load_json, save_json, KeyValueStore};

#[derive(Clone, Debug)]
pub struct LocationConfig {
    pub timeout: Duration,
    /// Used whenever the provider cannot produce a position.
    pub fallback: Coordinates,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(5), fallback: Coordinates::new(40.7128, -74.0060) }
    }
}

impl From<&configs::LocationConfig> for LocationConfig {
    fn from(cfg: &configs::LocationConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.timeout_secs),
            fallback: Coordinates::new(cfg.default_latitude, cfg.default_longitude),
        }
    }
}

/// Tracks the user's coordinates and mirrors them into storage.
pub struct LocationService {
    provider: Option<Arc<dyn GeolocationProvider>>,
    storage: Arc<dyn KeyValueStore>,
    cfg: LocationConfig,
    current: RwLock<Option<Coordinates>>,
    last_error: RwLock<Option<String>>,
}

impl LocationService {
    pub fn new(provider: Option<Arc<dyn GeolocationProvider>>, storage: Arc<dyn KeyValueStore>, cfg: LocationConfig) -> Self {
        Self { provider, storage, cfg, current: RwLock::new(None), last_error: RwLock::new(None) }
    }

    /// Ask the provider for a position. Geolocation failures never surface:
    /// they are logged and the fallback position is used instead.
    #[instrument(skip(self))]
    pub async fn locate(&self) -> Result<Coordinates, ServiceError> {
        *self.last_error.write().await = None;
        let position = match self.query_provider().await {
            Ok(pos) => {
                debug!(latitude = pos.latitude, longitude = pos.longitude, "position acquired");
                pos
            }
            Err(e) => {
                warn!(error = %e, "geolocation failed; using default location");
                *self.last_error.write().await = Some(e.to_string());
                self.cfg.fallback
            }
        };
        save_json(self.storage.as_ref(), keys::USER_LOCATION, &position).await?;
        *self.current.write().await = Some(position);
        Ok(position)
    }

    /// Use the stored position when there is one, otherwise [`Self::locate`].
    pub async fn restore_or_locate(&self) -> Result<Coordinates, ServiceError> {
        if let Some(stored) = load_json::<Coordinates>(self.storage.as_ref(), keys::USER_LOCATION).await {
            info!(latitude = stored.latitude, longitude = stored.longitude, "location_restored");
            *self.current.write().await = Some(stored);
            return Ok(stored);
        }
        self.locate().await
    }

    pub async fn current(&self) -> Option<Coordinates> {
        *self.current.read().await
    }

    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    async fn query_provider(&self) -> Result<Coordinates, LocationError> {
        let provider = self.provider.as_ref().ok_or(LocationError::Unsupported)?;
        match tokio::time::timeout(self.cfg.timeout, provider.current_position()).await {
            Ok(res) => res,
            Err(_) => Err(LocationError::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::provider::FixedPosition;
    use crate::storage::LocalStorage;
    use async_trait::async_trait;

    struct Stalled;

    #[async_trait]
    impl GeolocationProvider for Stalled {
        async fn current_position(&self) -> Result<Coordinates, LocationError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(LocationError::Unavailable("never".into()))
        }
    }

    struct Denied;

    #[async_trait]
    impl GeolocationProvider for Denied {
        async fn current_position(&self) -> Result<Coordinates, LocationError> {
            Err(LocationError::PermissionDenied)
        }
    }

    async fn storage() -> anyhow::Result<(Arc<LocalStorage>, std::path::PathBuf)> {
        let path = std::env::temp_dir().join(format!("svc_location_{}.json", uuid::Uuid::new_v4()));
        Ok((LocalStorage::open(&path).await?, path))
    }

    #[tokio::test]
    async fn provider_position_is_persisted() -> anyhow::Result<()> {
        let (store, path) = storage().await?;
        let delhi = Coordinates::new(28.6139, 77.2090);
        let svc = LocationService::new(Some(Arc::new(FixedPosition(delhi))), store.clone(), LocationConfig::default());
        assert_eq!(svc.locate().await?, delhi);
        assert!(svc.last_error().await.is_none());

        let reloaded: Option<Coordinates> = load_json(store.as_ref(), keys::USER_LOCATION).await;
        assert_eq!(reloaded, Some(delhi));
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn failures_fall_back_to_default() -> anyhow::Result<()> {
        let (store, path) = storage().await?;
        let cfg = LocationConfig::default();

        let none = LocationService::new(None, store.clone(), cfg.clone());
        assert_eq!(none.locate().await?, cfg.fallback);
        assert_eq!(none.last_error().await.as_deref(), Some("Geolocation is not supported"));

        let denied = LocationService::new(Some(Arc::new(Denied)), store.clone(), cfg.clone());
        assert_eq!(denied.locate().await?, cfg.fallback);
        assert_eq!(denied.current().await, Some(cfg.fallback));

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn slow_provider_times_out() -> anyhow::Result<()> {
        let (store, path) = storage().await?;
        let cfg = LocationConfig { timeout: Duration::from_millis(20), ..LocationConfig::default() };
        let svc = LocationService::new(Some(Arc::new(Stalled)), store, cfg.clone());
        assert_eq!(svc.locate().await?, cfg.fallback);
        assert_eq!(svc.last_error().await, Some(LocationError::Timeout.to_string()));
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn stored_location_wins_over_provider() -> anyhow::Result<()> {
        let (store, path) = storage().await?;
        let stored = Coordinates::new(19.0760, 72.8777);
        save_json(store.as_ref(), keys::USER_LOCATION, &stored).await?;

        let svc = LocationService::new(Some(Arc::new(FixedPosition(Coordinates::new(0.0, 0.0)))), store, LocationConfig::default());
        assert_eq!(svc.restore_or_locate().await?, stored);
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
