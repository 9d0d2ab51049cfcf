//! Claiming Optimizer - household benefit claiming strategy analysis
//!
//! This library provides:
//! - Claiming-age adjustment of an age-gated, COLA-adjusted lifetime benefit
//! - Year-by-year household benefit simulation with survivor transitions
//! - Break-even location between claiming strategies
//! - Canonical and exhaustive claiming-strategy comparison
//! - After-tax ranking of jurisdictions and of simulated strategies
//!
//! All components are pure transformations over immutable value objects:
//! the same inputs always produce the same outputs, and monetary results are
//! rounded to cents at the public entry boundary.

pub mod assumptions;
pub mod compare;
pub mod error;
pub mod household;
pub mod simulation;
pub mod tax;

// Re-export commonly used types
pub use compare::{ComparisonCache, GridCell, StrategyComparator, StrategyComparisonResult};
pub use error::OptimizerError;
pub use household::{Claimant, FilingStatus, HouseholdParams};
pub use simulation::{ClaimingStrategy, HouseholdBenefitSimulator, YearlyBenefitRecord};
pub use tax::{StateTaxRanking, StrategyTaxRanking, TaxRule, TaxRuleSource, TaxRuleTable};

pub use compare::find_break_even;
pub use tax::{rank_states_by_after_tax, rank_strategies_by_after_tax};

/// Multiplier applied to the reference benefit for a given claiming age
pub fn compute_adjustment(claiming_age: f64, reference_age: f64) -> f64 {
    assumptions::claiming_multiplier(claiming_age, reference_age)
}

/// Simulate one claiming strategy for a household.
/// `spouse_claiming_age` is required for married households.
pub fn simulate_household(
    params: &HouseholdParams,
    primary_claiming_age: f64,
    spouse_claiming_age: Option<f64>,
) -> Result<ClaimingStrategy, OptimizerError> {
    HouseholdBenefitSimulator::new(params.clone())
        .simulate(primary_claiming_age, spouse_claiming_age)
}

/// Run the canonical Earliest / Balanced / Optimal comparison
pub fn compare_strategies(
    params: &HouseholdParams,
) -> Result<StrategyComparisonResult, OptimizerError> {
    StrategyComparator::new(params.clone()).compare()
}
