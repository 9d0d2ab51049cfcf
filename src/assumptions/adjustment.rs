//! Claiming-age benefit adjustment
//!
//! Maps a claiming age relative to the reference ("full") age onto a
//! multiplier applied to the base benefit. Delayed claiming earns an 8%/year
//! credit; early claiming takes a two-tier monthly reduction (5/9 of 1% per
//! month for the first 36 months, 5/12 of 1% per month beyond). The curve is
//! continuous at the 36-month boundary and exactly 1.0 at the reference age.

use super::constants::{
    DELAYED_CREDIT_RATE, EARLY_FIRST_TIER_MONTHS, OWN_FIRST_TIER_RATE, OWN_SECOND_TIER_RATE,
};

/// Multiplier applied to the reference benefit for a given claiming age.
///
/// Both ages may be fractional years. There are no error conditions; ages are
/// range-checked at the simulator boundary, not here.
pub fn claiming_multiplier(claiming_age: f64, reference_age: f64) -> f64 {
    if claiming_age >= reference_age {
        let months_late = (claiming_age - reference_age) * 12.0;
        1.0 + (months_late / 12.0) * DELAYED_CREDIT_RATE
    } else {
        let months_early = (reference_age - claiming_age) * 12.0;
        let reduction = if months_early <= EARLY_FIRST_TIER_MONTHS {
            months_early * OWN_FIRST_TIER_RATE
        } else {
            EARLY_FIRST_TIER_MONTHS * OWN_FIRST_TIER_RATE
                + (months_early - EARLY_FIRST_TIER_MONTHS) * OWN_SECOND_TIER_RATE
        };
        1.0 - reduction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_age_is_identity() {
        assert_eq!(claiming_multiplier(67.0, 67.0), 1.0);
        assert_eq!(claiming_multiplier(66.5, 66.5), 1.0);
    }

    #[test]
    fn test_claim_at_62_with_reference_67() {
        // 60 months early: 36 * 5/9% + 24 * 5/12% = 20% + 10% = 30% reduction
        assert_relative_eq!(claiming_multiplier(62.0, 67.0), 0.70, max_relative = 1e-12);
    }

    #[test]
    fn test_claim_at_70_with_reference_67() {
        // 3 years of delayed credits at 8%/year
        assert_relative_eq!(claiming_multiplier(70.0, 67.0), 1.24, max_relative = 1e-12);
    }

    #[test]
    fn test_continuous_at_tier_boundary() {
        // 36 months early exactly, approached from both tiers
        let at_boundary = claiming_multiplier(64.0, 67.0);
        let just_inside = claiming_multiplier(64.0 + 1e-9, 67.0);
        let just_outside = claiming_multiplier(64.0 - 1e-9, 67.0);
        assert_relative_eq!(at_boundary, 1.0 - 0.20, max_relative = 1e-12);
        assert_relative_eq!(just_inside, at_boundary, max_relative = 1e-6);
        assert_relative_eq!(just_outside, at_boundary, max_relative = 1e-6);
    }

    #[test]
    fn test_strictly_increasing_over_claimable_range() {
        let mut prev = claiming_multiplier(62.0, 67.0);
        let mut age = 62.0 + 1.0 / 12.0;
        while age <= 70.0 + 1e-9 {
            let m = claiming_multiplier(age, 67.0);
            assert!(m > prev, "multiplier not increasing at age {age}");
            prev = m;
            age += 1.0 / 12.0;
        }
    }

    #[test]
    fn test_fractional_claiming_age() {
        // 6 months early: 6 * 5/9% = 3.333..% reduction
        assert_relative_eq!(
            claiming_multiplier(66.5, 67.0),
            1.0 - 6.0 * 5.0 / 9.0 / 100.0,
            max_relative = 1e-12
        );
    }
}
