//! Year-by-year household benefit simulation

mod engine;
mod state;
mod stream;

pub use engine::HouseholdBenefitSimulator;
pub use state::{ClaimantPhase, ClaimantTrack};
pub use stream::{ClaimingStrategy, YearlyBenefitRecord};
