//! Runtime wiring
//!
//! Builds every service from an [`AppConfig`] so binaries hold one
//! explicitly constructed [`Services`] value instead of ambient globals.

use std::sync::Arc;

use configs::AppConfig;
use models::Coordinates;
use tracing::info;

use crate::auth::{RosterAuthBackend, SessionConfig, SessionService};
use crate::directory::{Catalog, OrganizationDirectory};
use crate::location::{FixedPosition, GeolocationProvider, LocationConfig, LocationService};
use crate::storage::LocalStorage;

pub struct Services {
    pub storage: Arc<LocalStorage>,
    pub session: Arc<SessionService<RosterAuthBackend>>,
    pub location: Arc<LocationService>,
    pub directory: Arc<OrganizationDirectory>,
}

/// Ensure the data directory exists; warn on a missing catalog file.
pub async fn ensure_env(cfg: &AppConfig) -> anyhow::Result<()> {
    common::env::ensure_env(&cfg.storage.data_dir, cfg.catalog.path.as_deref()).await
}

/// Construct all services. Nothing is restored yet; see [`Services::restore`].
pub async fn build_services(cfg: &AppConfig) -> anyhow::Result<Services> {
    ensure_env(cfg).await?;
    let storage = LocalStorage::open(cfg.storage_path()).await?;

    let backend = Arc::new(RosterAuthBackend::builtin()?);
    let session = Arc::new(SessionService::new(backend, storage.clone(), SessionConfig::from(&cfg.session)));

    let provider: Option<Arc<dyn GeolocationProvider>> = cfg
        .location
        .fixed
        .map(|p| Arc::new(FixedPosition(Coordinates::new(p.latitude, p.longitude))) as Arc<dyn GeolocationProvider>);
    let location = Arc::new(LocationService::new(provider, storage.clone(), LocationConfig::from(&cfg.location)));

    let directory = match &cfg.catalog.path {
        Some(path) => OrganizationDirectory::checked(Catalog::from_json_file(path).await?)?,
        None => OrganizationDirectory::sample(),
    };
    info!(
        storage = %storage.path().display(),
        organizations = directory.organizations().len(),
        "services_built"
    );

    Ok(Services { storage, session, location, directory: Arc::new(directory) })
}

impl Services {
    /// Startup restore: the persisted session and the user's location.
    pub async fn restore(&self) -> anyhow::Result<Coordinates> {
        self.session.restore_session().await;
        let here = self.location.restore_or_locate().await?;
        Ok(here)
    }
}
