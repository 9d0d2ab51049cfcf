//! Household parameter value objects

mod data;

pub use data::{Claimant, FilingStatus, HouseholdParams};
