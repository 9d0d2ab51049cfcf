//! Cost-of-living compounding
//!
//! The single source for COLA compounding, used both for growing the reference
//! benefit forward to the claiming age and for ongoing post-claim increases
//! inside the simulator. Both paths share the same rate and whole-year
//! compounding convention.

/// Compound an amount by `(1 + rate)` for a whole number of years.
pub fn compound(amount: f64, rate: f64, whole_years: u32) -> f64 {
    amount * (1.0 + rate).powi(whole_years as i32)
}

/// Grow a reference benefit from the claimant's current age to their claiming
/// age. Uses `max(0, claiming_age - current_age)` whole years; a claiming age
/// at or before the current age returns the amount unchanged.
pub fn project_to_claiming_age(
    base_amount: f64,
    current_age: f64,
    claiming_age: f64,
    cola_rate: f64,
) -> f64 {
    let years = (claiming_age - current_age).max(0.0).floor() as u32;
    compound(base_amount, cola_rate, years)
}
