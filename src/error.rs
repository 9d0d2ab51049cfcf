//! Error types for the claiming optimizer

use thiserror::Error;

/// Errors surfaced by the optimizer's public entry points
#[derive(Debug, Error)]
pub enum OptimizerError {
    /// A claiming age outside the supported claimable range.
    ///
    /// Out-of-range ages are rejected rather than clamped, since clamping
    /// would silently compare a different strategy than the one requested.
    #[error("claiming age {age} is outside the claimable range {min}..={max}")]
    ClaimingAgeOutOfRange { age: f64, min: f64, max: f64 },

    /// Household marked as married but no spouse record was supplied.
    /// The simulator never guesses spouse defaults.
    #[error("household is married but no spouse record was provided")]
    MissingSpouseData,

    /// Exhaustive claiming-age search requires a married household.
    #[error("exhaustive claiming-age search requires a married household")]
    SearchRequiresSpouse,

    /// No tax rule found for the requested jurisdiction code.
    #[error("no tax rule for jurisdiction {0}")]
    UnknownJurisdiction(String),
}
