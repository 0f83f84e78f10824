use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    Food,
    Books,
    Clothes,
    Money,
    Infrastructure,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Accepted,
    Completed,
    Rejected,
}

impl DonationStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, DonationStatus::Completed | DonationStatus::Rejected)
    }

    /// Forward-only lifecycle; nothing leaves `Completed` or `Rejected`.
    pub fn can_transition_to(self, next: DonationStatus) -> bool {
        use DonationStatus::*;
        matches!(
            (self, next),
            (Pending, Accepted) | (Pending, Rejected) | (Pending, Completed)
                | (Accepted, Completed) | (Accepted, Rejected)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Accepted => "accepted",
            DonationStatus::Completed => "completed",
            DonationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub donor_id: String,
    pub organization_id: String,
    #[serde(rename = "type")]
    pub kind: DonationType,
    pub description: String,
    pub date: NaiveDate,
    pub status: DonationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<u32>,
}

impl Donation {
    /// Move to `next`, rejecting illegal transitions.
    pub fn transition_to(&mut self, next: DonationStatus) -> Result<(), ModelError> {
        if !self.status.can_transition_to(next) {
            return Err(ModelError::InvalidTransition { from: self.status.to_string(), to: next.to_string() });
        }
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation(status: DonationStatus) -> Donation {
        Donation {
            id: "don9".into(),
            donor_id: "d1".into(),
            organization_id: "org1".into(),
            kind: DonationType::Food,
            description: "rice".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status,
            certificate_id: None,
            points_awarded: None,
        }
    }

    #[test]
    fn pending_can_be_accepted_then_completed() {
        let mut d = donation(DonationStatus::Pending);
        d.transition_to(DonationStatus::Accepted).unwrap();
        d.transition_to(DonationStatus::Completed).unwrap();
        assert_eq!(d.status, DonationStatus::Completed);
    }

    #[test]
    fn terminal_states_are_final() {
        for terminal in [DonationStatus::Completed, DonationStatus::Rejected] {
            assert!(terminal.is_terminal());
            let mut d = donation(terminal);
            for next in [DonationStatus::Pending, DonationStatus::Accepted, DonationStatus::Completed, DonationStatus::Rejected] {
                assert!(d.transition_to(next).is_err(), "{terminal} -> {next} must be rejected");
            }
            assert_eq!(d.status, terminal);
        }
    }

    #[test]
    fn no_going_back_to_pending() {
        let mut d = donation(DonationStatus::Accepted);
        let err = d.transition_to(DonationStatus::Pending).unwrap_err();
        assert_eq!(err, ModelError::InvalidTransition { from: "accepted".into(), to: "pending".into() });
    }
}
