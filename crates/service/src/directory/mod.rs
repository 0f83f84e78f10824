//! Read-only organization catalog and the queries the dashboards run on it.

pub mod catalog;
pub mod query;
pub mod sample;
pub mod service;

pub use catalog::Catalog;
pub use query::OrganizationFilter;
pub use service::{DonorSummary, OrganizationDirectory};
