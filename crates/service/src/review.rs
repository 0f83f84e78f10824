//! Recipient-side review of incoming donation and event requests.
//!
//! A [`RequestQueue`] holds its own copies of one organization's records; the
//! directory catalog itself never changes.

use models::{Donation, DonationStatus, Event, EventStatus};
use tracing::info;

use crate::directory::OrganizationDirectory;
use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct RequestQueue {
    organization_id: String,
    donations: Vec<Donation>,
    events: Vec<Event>,
}

impl RequestQueue {
    /// Snapshot the organization's donations and events, newest first.
    pub fn for_organization(directory: &OrganizationDirectory, organization_id: &str) -> Self {
        Self {
            organization_id: organization_id.to_string(),
            donations: directory.donations_by_organization(organization_id).into_iter().cloned().collect(),
            events: directory.events_by_organization(organization_id).into_iter().cloned().collect(),
        }
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    pub fn pending_donations(&self) -> impl Iterator<Item = &Donation> {
        self.donations.iter().filter(|d| d.status == DonationStatus::Pending)
    }

    pub fn completed_donations(&self) -> impl Iterator<Item = &Donation> {
        self.donations.iter().filter(|d| d.status == DonationStatus::Completed)
    }

    pub fn pending_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.status == EventStatus::Pending)
    }

    pub fn accept_donation(&mut self, id: &str) -> Result<&Donation, ServiceError> {
        self.move_donation(id, DonationStatus::Accepted)
    }

    pub fn reject_donation(&mut self, id: &str) -> Result<&Donation, ServiceError> {
        self.move_donation(id, DonationStatus::Rejected)
    }

    pub fn complete_donation(&mut self, id: &str) -> Result<&Donation, ServiceError> {
        self.move_donation(id, DonationStatus::Completed)
    }

    pub fn approve_event(&mut self, id: &str) -> Result<&Event, ServiceError> {
        self.move_event(id, EventStatus::Approved)
    }

    pub fn reject_event(&mut self, id: &str) -> Result<&Event, ServiceError> {
        self.move_event(id, EventStatus::Rejected)
    }

    fn move_donation(&mut self, id: &str, next: DonationStatus) -> Result<&Donation, ServiceError> {
        let donation = self
            .donations
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| ServiceError::not_found("donation"))?;
        let from = donation.status;
        donation.transition_to(next)?;
        info!(organization_id = %self.organization_id, donation_id = %id, %from, to = %next, "donation_status_changed");
        Ok(donation)
    }

    fn move_event(&mut self, id: &str, next: EventStatus) -> Result<&Event, ServiceError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ServiceError::not_found("event"))?;
        let from = event.status;
        event.transition_to(next)?;
        info!(organization_id = %self.organization_id, event_id = %id, %from, to = %next, "event_status_changed");
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_pending_donation() {
        let dir = OrganizationDirectory::sample();
        let mut queue = RequestQueue::for_organization(&dir, "org5");
        assert_eq!(queue.pending_donations().count(), 1);

        let accepted = queue.accept_donation("don5").unwrap();
        assert_eq!(accepted.status, DonationStatus::Accepted);
        assert_eq!(queue.pending_donations().count(), 0);
        // the catalog copy is untouched
        assert_eq!(dir.donation("don5").unwrap().status, DonationStatus::Pending);

        queue.complete_donation("don5").unwrap();
        assert_eq!(queue.completed_donations().count(), 1);
    }

    #[test]
    fn completed_donation_cannot_be_rejected() {
        let dir = OrganizationDirectory::sample();
        let mut queue = RequestQueue::for_organization(&dir, "org1");
        assert_eq!(queue.completed_donations().count(), 2);
        let err = queue.reject_donation("don1").unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        assert_eq!(queue.completed_donations().count(), 2);
    }

    #[test]
    fn unknown_or_foreign_ids_are_not_found() {
        let dir = OrganizationDirectory::sample();
        let mut queue = RequestQueue::for_organization(&dir, "org1");
        // don5 belongs to org5
        assert!(matches!(queue.accept_donation("don5"), Err(ServiceError::NotFound(_))));
        assert!(matches!(queue.approve_event("evt404"), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn event_review() {
        let dir = OrganizationDirectory::sample();
        let mut queue = RequestQueue::for_organization(&dir, "org4");
        assert_eq!(queue.pending_events().count(), 1);
        queue.reject_event("evt3").unwrap();
        assert!(queue.approve_event("evt3").is_err());
        assert_eq!(queue.pending_events().count(), 0);

        let mut org2 = RequestQueue::for_organization(&dir, "org2");
        // already approved
        assert!(org2.approve_event("evt2").is_err());
        assert_eq!(org2.organization_id(), "org2");
    }
}
