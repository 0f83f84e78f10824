use std::cmp::Reverse;

use models::{Certificate, Donation, DonationStatus, Event, LeaderboardEntry, Organization};
use serde::Serialize;
use tracing::debug;

use super::catalog::Catalog;
use super::query::{filter_and_rank, OrganizationFilter};
use crate::errors::ServiceError;

/// Donation totals for one donor, as shown on the donor dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DonorSummary {
    pub completed: usize,
    pub pending: usize,
    pub points_awarded: u32,
}

/// Read-only view over a [`Catalog`]. Misses are `None`, never errors.
#[derive(Debug, Clone)]
pub struct OrganizationDirectory {
    catalog: Catalog,
}

impl OrganizationDirectory {
    /// Wrap a catalog as-is; references between records are not checked.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Wrap a catalog after checking that every reference resolves.
    pub fn checked(catalog: Catalog) -> Result<Self, ServiceError> {
        catalog.validate_references()?;
        Ok(Self { catalog })
    }

    /// Directory over the built-in sample catalog.
    pub fn sample() -> Self {
        Self::new(super::sample::catalog().clone())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn organizations(&self) -> &[Organization] {
        &self.catalog.organizations
    }

    pub fn organization(&self, id: &str) -> Option<&Organization> {
        self.catalog.organizations.iter().find(|o| o.id == id)
    }

    /// Organizations within the filter bounds, highest priority first and
    /// nearest first within a priority.
    pub fn filter(&self, filter: &OrganizationFilter) -> Vec<&Organization> {
        let ranked = filter_and_rank(&self.catalog.organizations, filter);
        debug!(
            max_distance = ?filter.max_distance,
            min_priority = ?filter.min_priority.map(|p| p.level()),
            results = ranked.len(),
            "organizations filtered"
        );
        ranked
    }

    /// [`Self::filter`], then keep organizations whose name or description
    /// contains `term`, ignoring case. Whitespace in `term` is significant.
    pub fn search(&self, term: &str, filter: &OrganizationFilter) -> Vec<&Organization> {
        let needle = term.to_lowercase();
        let mut ranked = self.filter(filter);
        if !needle.is_empty() {
            ranked.retain(|o| o.matches_lowercase(&needle));
        }
        ranked
    }

    pub fn donation(&self, id: &str) -> Option<&Donation> {
        self.catalog.donations.iter().find(|d| d.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.catalog.events.iter().find(|e| e.id == id)
    }

    pub fn certificate(&self, id: &str) -> Option<&Certificate> {
        self.catalog.certificates.iter().find(|c| c.id == id)
    }

    pub fn certificate_for_donation(&self, donation_id: &str) -> Option<&Certificate> {
        self.catalog.certificates.iter().find(|c| c.donation_id == donation_id)
    }

    /// Newest first.
    pub fn donations_by_donor(&self, donor_id: &str) -> Vec<&Donation> {
        newest_first(self.catalog.donations.iter().filter(|d| d.donor_id == donor_id), |d| d.date)
    }

    /// Newest first.
    pub fn donations_by_organization(&self, org_id: &str) -> Vec<&Donation> {
        newest_first(self.catalog.donations.iter().filter(|d| d.organization_id == org_id), |d| d.date)
    }

    pub fn events_by_donor(&self, donor_id: &str) -> Vec<&Event> {
        newest_first(self.catalog.events.iter().filter(|e| e.donor_id == donor_id), |e| e.date)
    }

    pub fn events_by_organization(&self, org_id: &str) -> Vec<&Event> {
        newest_first(self.catalog.events.iter().filter(|e| e.organization_id == org_id), |e| e.date)
    }

    pub fn certificates_by_donor(&self, donor_id: &str) -> Vec<&Certificate> {
        newest_first(self.catalog.certificates.iter().filter(|c| c.donor_id == donor_id), |c| c.date)
    }

    /// Entries in rank order.
    pub fn leaderboard(&self) -> Vec<&LeaderboardEntry> {
        let mut entries: Vec<&LeaderboardEntry> = self.catalog.leaderboard.iter().collect();
        entries.sort_by_key(|e| e.rank);
        entries
    }

    pub fn leaderboard_entry(&self, donor_id: &str) -> Option<&LeaderboardEntry> {
        self.catalog.leaderboard.iter().find(|e| e.donor_id == donor_id)
    }

    pub fn donor_summary(&self, donor_id: &str) -> DonorSummary {
        self.catalog
            .donations
            .iter()
            .filter(|d| d.donor_id == donor_id)
            .fold(DonorSummary::default(), |mut acc, d| {
                match d.status {
                    DonationStatus::Completed => acc.completed += 1,
                    DonationStatus::Pending => acc.pending += 1,
                    _ => {}
                }
                acc.points_awarded += d.points_awarded.unwrap_or(0);
                acc
            })
    }
}

fn newest_first<'a, T, K: Ord>(items: impl Iterator<Item = &'a T>, key: impl Fn(&T) -> K) -> Vec<&'a T> {
    let mut out: Vec<&T> = items.collect();
    out.sort_by_key(|item| Reverse(key(item)));
    out
}
