//! Domain records shared by the session and directory services.
//!
//! All records serialize as camelCase JSON, the format used for persisted
//! state and catalog files.

pub mod errors;
pub mod geo;
pub mod user;
pub mod organization;
pub mod donation;
pub mod event;
pub mod certificate;
pub mod leaderboard;

pub use certificate::Certificate;
pub use donation::{Donation, DonationStatus, DonationType};
pub use event::{Event, EventStatus};
pub use geo::Coordinates;
pub use leaderboard::LeaderboardEntry;
pub use organization::{DonationNeed, GalleryKind, GalleryPhoto, Organization, Priority};
pub use user::{Role, User};
