use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::donation::DonationType;
use crate::errors::ModelError;
use crate::geo::Coordinates;

/// Urgency level, 1 (low) to 3 (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const LOW: Priority = Priority(1);
    pub const MEDIUM: Priority = Priority(2);
    pub const HIGH: Priority = Priority(3);

    pub fn new(level: u8) -> Result<Self, ModelError> {
        if (1..=3).contains(&level) {
            Ok(Priority(level))
        } else {
            Err(ModelError::Validation(format!("priority must be 1..=3, got {level}")))
        }
    }

    pub fn level(self) -> u8 { self.0 }
}

impl TryFrom<u8> for Priority {
    type Error = ModelError;
    fn try_from(value: u8) -> Result<Self, Self::Error> { Priority::new(value) }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self { p.0 }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A declared requirement for one kind of donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationNeed {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DonationType,
    pub description: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKind {
    Donation,
    Event,
    Facility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPhoto {
    pub id: String,
    pub image_url: String,
    pub caption: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: GalleryKind,
}

/// Catalog entry for a recipient organization.
///
/// `distance` is precomputed (km from the reference point) and is not
/// derived from `coordinates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub coordinates: Coordinates,
    pub distance: f64,
    pub priority_level: Priority,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub donation_needs: Vec<DonationNeed>,
    #[serde(default)]
    pub donation_count: u32,
    #[serde(default)]
    pub accepts_events: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo_gallery: Vec<GalleryPhoto>,
}

impl Organization {
    /// Case-insensitive substring match against name or description.
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }

    /// Photos of one kind, or all of them when `kind` is `None`.
    pub fn gallery(&self, kind: Option<GalleryKind>) -> impl Iterator<Item = &GalleryPhoto> {
        self.photo_gallery.iter().filter(move |p| kind.map_or(true, |k| p.kind == k))
    }
}
