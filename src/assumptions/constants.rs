//! Canonical rate and threshold constants
//!
//! Every rate, coefficient, and threshold used anywhere in the optimizer lives
//! here. Consuming modules import these; no module restates a literal.

/// Earliest claimable age
pub const MIN_CLAIMING_AGE: f64 = 62.0;

/// Latest claimable age (delayed credits stop accruing here)
pub const MAX_CLAIMING_AGE: f64 = 70.0;

/// Delayed claiming credit per year past the reference age
pub const DELAYED_CREDIT_RATE: f64 = 0.08;

/// Length of the first (steeper) early-claiming reduction tier, in months
pub const EARLY_FIRST_TIER_MONTHS: f64 = 36.0;

/// Own-benefit reduction per month early, first 36 months: 5/9 of 1%
pub const OWN_FIRST_TIER_RATE: f64 = 5.0 / 9.0 / 100.0;

/// Own-benefit reduction per month early beyond 36 months: 5/12 of 1%
pub const OWN_SECOND_TIER_RATE: f64 = 5.0 / 12.0 / 100.0;

/// Spousal-benefit reduction per month early, first 36 months: 25/36 of 1%
pub const SPOUSAL_FIRST_TIER_RATE: f64 = 25.0 / 36.0 / 100.0;

/// Spousal-benefit reduction per month early beyond 36 months: 5/12 of 1%
pub const SPOUSAL_SECOND_TIER_RATE: f64 = 5.0 / 12.0 / 100.0;

/// Spousal benefit cap as a fraction of the partner's reference amount
pub const SPOUSAL_CAP: f64 = 0.50;

/// Default annual cost-of-living adjustment rate
pub const DEFAULT_COLA_RATE: f64 = 0.0254;

/// Sentinel age returned when two strategies never cross within the horizon
pub const BREAK_EVEN_NEVER: f64 = 100.0;

/// Default fixed non-benefit annual income assumed for after-tax scoring
pub const DEFAULT_OTHER_ANNUAL_INCOME: f64 = 30_000.0;

/// Default marginal federal rate applied to the taxable share of benefits
pub const DEFAULT_FEDERAL_MARGINAL_RATE: f64 = 0.22;

/// Provisional-income lower threshold, single filer
pub const FEDERAL_LOWER_THRESHOLD_SINGLE: f64 = 25_000.0;

/// Provisional-income upper threshold, single filer
pub const FEDERAL_UPPER_THRESHOLD_SINGLE: f64 = 34_000.0;

/// Provisional-income lower threshold, married filing jointly
pub const FEDERAL_LOWER_THRESHOLD_MARRIED: f64 = 32_000.0;

/// Provisional-income upper threshold, married filing jointly
pub const FEDERAL_UPPER_THRESHOLD_MARRIED: f64 = 44_000.0;

/// Share of the benefit exposed to federal tax between the two thresholds
pub const TAXABLE_SHARE_MID: f64 = 0.50;

/// Share of the benefit exposed to federal tax above the upper threshold
pub const TAXABLE_SHARE_HIGH: f64 = 0.85;

/// Exhaustive-search score weight on total lifetime benefits
pub const SCORE_LIFETIME_WEIGHT: f64 = 0.6;

/// Exhaustive-search score weight on benefits paid during survivor years
pub const SCORE_SURVIVOR_WEIGHT: f64 = 0.4;

/// Lifetime advantage (vs the Earliest strategy) above which delaying is
/// strongly recommended
pub const STRONG_ADVANTAGE_THRESHOLD: f64 = 100_000.0;

/// Lifetime advantage above which delaying is moderately recommended
pub const MODERATE_ADVANTAGE_THRESHOLD: f64 = 25_000.0;

/// Round a monetary amount to cent precision.
///
/// Applied once at each public entry boundary, never mid-loop, so rounding
/// drift cannot compound across a multi-decade simulation.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
