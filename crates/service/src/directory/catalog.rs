use std::collections::HashSet;
use std::path::Path;

use models::errors::ModelError;
use models::{Certificate, Donation, Event, LeaderboardEntry, Organization};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ServiceError;

/// Everything the directory serves, fixed at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub donations: Vec<Donation>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Catalog {
    /// Load a catalog from a JSON document with the same shape as [`Catalog`].
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ServiceError::Catalog(format!("cannot read {}: {e}", path.display())))?;
        let catalog: Catalog = serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Catalog(format!("cannot parse {}: {e}", path.display())))?;
        info!(
            path = %path.display(),
            organizations = catalog.organizations.len(),
            donations = catalog.donations.len(),
            "catalog_loaded"
        );
        Ok(catalog)
    }

    /// Check that donations and events point at known organizations and that
    /// certificates point at known donations. Ids must also be unique per kind.
    pub fn validate_references(&self) -> Result<(), ModelError> {
        let org_ids = unique_ids("organization", self.organizations.iter().map(|o| o.id.as_str()))?;
        let donation_ids = unique_ids("donation", self.donations.iter().map(|d| d.id.as_str()))?;
        unique_ids("event", self.events.iter().map(|e| e.id.as_str()))?;
        unique_ids("certificate", self.certificates.iter().map(|c| c.id.as_str()))?;

        for d in &self.donations {
            require(&org_ids, "donation", &d.id, "organization", &d.organization_id)?;
        }
        for e in &self.events {
            require(&org_ids, "event", &e.id, "organization", &e.organization_id)?;
        }
        for c in &self.certificates {
            require(&donation_ids, "certificate", &c.id, "donation", &c.donation_id)?;
        }
        Ok(())
    }
}

fn unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<HashSet<&'a str>, ModelError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ModelError::Validation(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(seen)
}

fn require(
    known: &HashSet<&str>,
    entity: &'static str,
    id: &str,
    target: &'static str,
    target_id: &str,
) -> Result<(), ModelError> {
    if known.contains(target_id) {
        return Ok(());
    }
    Err(ModelError::DanglingReference { entity, id: id.to_string(), target, target_id: target_id.to_string() })
}
