use std::cmp::Ordering;

use models::{Organization, Priority};

/// Optional bounds applied before ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrganizationFilter {
    /// Keep organizations at most this far away (km).
    pub max_distance: Option<f64>,
    /// Keep organizations at or above this priority.
    pub min_priority: Option<Priority>,
}

impl OrganizationFilter {
    pub fn new(max_distance: Option<f64>, min_priority: Option<Priority>) -> Self {
        Self { max_distance, min_priority }
    }

    pub fn accepts(&self, org: &Organization) -> bool {
        self.max_distance.map_or(true, |max| org.distance <= max)
            && self.min_priority.map_or(true, |min| org.priority_level >= min)
    }
}

/// Higher priority first, then nearer first.
pub fn rank(a: &Organization, b: &Organization) -> Ordering {
    b.priority_level
        .cmp(&a.priority_level)
        .then_with(|| a.distance.total_cmp(&b.distance))
}

/// Filter then rank. `sort_by` is stable, so organizations equal on both keys
/// keep their catalog order.
pub fn filter_and_rank<'a>(orgs: impl IntoIterator<Item = &'a Organization>, filter: &OrganizationFilter) -> Vec<&'a Organization> {
    let mut kept: Vec<&Organization> = orgs.into_iter().filter(|o| filter.accepts(o)).collect();
    kept.sort_by(|a, b| rank(a, b));
    kept
}
