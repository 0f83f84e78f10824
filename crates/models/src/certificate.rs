use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Proof of a completed donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub donation_id: String,
    pub donor_id: String,
    pub organization_id: String,
    pub date: NaiveDate,
    pub verification_code: String,
    pub download_url: String,
}
