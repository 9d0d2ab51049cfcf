//! Spousal benefit resolution
//!
//! A married claimant may draw a benefit derived from their partner's
//! reference amount instead of their own: 50% of the partner's reference
//! amount, reduced for early claiming on a steeper schedule than the own
//! benefit (25/36 of 1% per month for the first 36 months, 5/12 of 1% per
//! month beyond). Claiming past the reference age earns no spousal credit.
//! A claimant always receives the larger of the two, never both.

use serde::{Deserialize, Serialize};

use super::constants::{
    EARLY_FIRST_TIER_MONTHS, SPOUSAL_CAP, SPOUSAL_FIRST_TIER_RATE, SPOUSAL_SECOND_TIER_RATE,
};

/// Outcome of resolving own benefit against the derived spousal benefit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResolvedBenefit {
    /// Claimant's own adjusted monthly benefit
    pub own_benefit: f64,
    /// Derived spousal monthly benefit after cap and early reduction
    pub spousal_benefit: f64,
    /// Whether the spousal benefit is the one actually paid
    pub uses_spousal: bool,
}

impl ResolvedBenefit {
    /// The monthly amount actually paid
    pub fn payable(&self) -> f64 {
        self.own_benefit.max(self.spousal_benefit)
    }
}

/// Early-claiming multiplier on the spousal benefit.
///
/// Distinct coefficients from the own-benefit schedule; no delayed credit
/// above the reference age.
fn spousal_multiplier(claiming_age: f64, reference_age: f64) -> f64 {
    if claiming_age >= reference_age {
        return 1.0;
    }
    let months_early = (reference_age - claiming_age) * 12.0;
    let reduction = if months_early <= EARLY_FIRST_TIER_MONTHS {
        months_early * SPOUSAL_FIRST_TIER_RATE
    } else {
        EARLY_FIRST_TIER_MONTHS * SPOUSAL_FIRST_TIER_RATE
            + (months_early - EARLY_FIRST_TIER_MONTHS) * SPOUSAL_SECOND_TIER_RATE
    };
    1.0 - reduction
}

/// Resolve a claimant's own adjusted benefit against the spousal alternative.
///
/// `partner_reference_amount` is the partner's reference monthly benefit,
/// already COLA-projected to this claimant's claiming age by the caller.
/// `claiming_age` and `reference_age` are the claimant's own.
pub fn resolve(
    own_adjusted_benefit: f64,
    partner_reference_amount: f64,
    claiming_age: f64,
    reference_age: f64,
) -> ResolvedBenefit {
    let spousal_benefit = partner_reference_amount
        * SPOUSAL_CAP
        * spousal_multiplier(claiming_age, reference_age);

    ResolvedBenefit {
        own_benefit: own_adjusted_benefit,
        spousal_benefit,
        uses_spousal: spousal_benefit > own_adjusted_benefit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spousal_cap_at_reference_age() {
        let resolved = resolve(800.0, 2400.0, 67.0, 67.0);
        assert_relative_eq!(resolved.spousal_benefit, 1200.0, max_relative = 1e-12);
        assert!(resolved.uses_spousal);
        assert_eq!(resolved.payable(), 1200.0);
    }

    #[test]
    fn test_own_benefit_wins_when_larger() {
        let resolved = resolve(1500.0, 2400.0, 67.0, 67.0);
        assert!(!resolved.uses_spousal);
        assert_eq!(resolved.payable(), 1500.0);
    }

    #[test]
    fn test_early_spousal_reduction_two_tier() {
        // 60 months early: 36 * 25/36% + 24 * 5/12% = 25% + 10% = 35% reduction
        let resolved = resolve(0.0, 2000.0, 62.0, 67.0);
        assert_relative_eq!(
            resolved.spousal_benefit,
            2000.0 * 0.5 * 0.65,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_no_delayed_credit_on_spousal() {
        let at_reference = resolve(0.0, 2000.0, 67.0, 67.0);
        let delayed = resolve(0.0, 2000.0, 70.0, 67.0);
        assert_eq!(at_reference.spousal_benefit, delayed.spousal_benefit);
    }

    #[test]
    fn test_never_pays_both() {
        let resolved = resolve(1100.0, 2000.0, 66.0, 67.0);
        let payable = resolved.payable();
        assert!(payable == resolved.own_benefit || payable == resolved.spousal_benefit);
    }
}
