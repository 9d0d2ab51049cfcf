//! Benefit assumptions: claiming-age adjustment, COLA compounding, and
//! spousal resolution, plus the canonical constants module they share.

pub mod adjustment;
pub mod cola;
pub mod constants;
pub mod spousal;

pub use adjustment::claiming_multiplier;
pub use cola::{compound, project_to_claiming_age};
pub use spousal::{resolve, ResolvedBenefit};
