//! Break-even age between two claiming strategies
//!
//! A later-claiming strategy pays less early and more late; the break-even
//! age is the first age at which its cumulative benefits strictly overtake
//! the earlier strategy's.

use crate::assumptions::constants::BREAK_EVEN_NEVER;
use crate::simulation::ClaimingStrategy;

/// Combined claiming age used to orient the comparison
fn combined_claiming_age(strategy: &ClaimingStrategy) -> f64 {
    strategy.primary_claiming_age + strategy.spouse_claiming_age.unwrap_or(0.0)
}

/// Cumulative value at an index, extrapolating flat past the end of the
/// stream. Missing entries never read as zero; a finished stream just stops
/// accumulating.
fn cumulative_at(strategy: &ClaimingStrategy, index: usize) -> f64 {
    strategy
        .benefits_by_age
        .get(index)
        .or(strategy.benefits_by_age.last())
        .map(|r| r.cumulative_benefit)
        .unwrap_or(0.0)
}

/// First age at which the later-claiming strategy's cumulative benefits
/// strictly exceed the earlier-claiming strategy's.
///
/// Both streams must share the same age axis (the same household simulated
/// under different claiming ages). Returns the "never" sentinel age when the
/// streams do not cross within the horizon, or when either stream is empty.
pub fn find_break_even(a: &ClaimingStrategy, b: &ClaimingStrategy) -> f64 {
    let (earlier, later) = if combined_claiming_age(b) >= combined_claiming_age(a) {
        (a, b)
    } else {
        (b, a)
    };

    if earlier.benefits_by_age.is_empty() || later.benefits_by_age.is_empty() {
        return BREAK_EVEN_NEVER;
    }

    let horizon = earlier.benefits_by_age.len().max(later.benefits_by_age.len());
    for index in 0..horizon {
        if cumulative_at(later, index) > cumulative_at(earlier, index) {
            return later
                .benefits_by_age
                .get(index)
                .or_else(|| earlier.benefits_by_age.get(index))
                .map(|r| r.age)
                .unwrap_or(BREAK_EVEN_NEVER);
        }
    }

    BREAK_EVEN_NEVER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::{Claimant, HouseholdParams};
    use crate::simulation::HouseholdBenefitSimulator;

    fn simulator(life_expectancy: f64) -> HouseholdBenefitSimulator {
        HouseholdBenefitSimulator::new(
            HouseholdParams::single(Claimant::new(2000.0, 67.0, 62.0, life_expectancy))
                .with_cola_rate(0.0)
                .with_other_income(0.0),
        )
    }

    #[test]
    fn test_break_even_found_for_long_horizon() {
        let sim = simulator(90.0);
        let early = sim.simulate(62.0, None).unwrap();
        let late = sim.simulate(70.0, None).unwrap();

        let age = find_break_even(&early, &late);
        assert!(age < BREAK_EVEN_NEVER, "strategies should cross by age 90");
        // Never before the later strategy's own claiming age
        assert!(age >= 70.0);
        // Argument order must not matter
        assert_eq!(age, find_break_even(&late, &early));
    }

    #[test]
    fn test_break_even_never_for_short_horizon() {
        // Dying at 75 leaves too little time for the delayed claim to catch up
        let sim = simulator(75.0);
        let early = sim.simulate(62.0, None).unwrap();
        let late = sim.simulate(70.0, None).unwrap();

        assert_eq!(find_break_even(&early, &late), BREAK_EVEN_NEVER);
    }

    #[test]
    fn test_break_even_exact_crossing() {
        // Zero COLA: early pays 16,800/yr from 62, late pays 29,760/yr from 70.
        // Cumulative crossing: 16,800*(n+1) < 29,760*(n-7) from age 80 on.
        let sim = simulator(95.0);
        let early = sim.simulate(62.0, None).unwrap();
        let late = sim.simulate(70.0, None).unwrap();

        assert_eq!(find_break_even(&early, &late), 80.0);
    }

    #[test]
    fn test_empty_stream_returns_never() {
        let degenerate = HouseholdBenefitSimulator::new(
            HouseholdParams::single(Claimant::new(2000.0, 67.0, 70.0, 65.0))
                .with_cola_rate(0.0),
        );
        let empty = degenerate.simulate(70.0, None).unwrap();
        let sim = simulator(90.0);
        let normal = sim.simulate(62.0, None).unwrap();

        assert_eq!(find_break_even(&normal, &empty), BREAK_EVEN_NEVER);
    }
}
