//! Per-claimant state tracking for the household simulation

use serde::{Deserialize, Serialize};

use crate::assumptions::cola;

/// Phase of one claimant in a given simulation year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimantPhase {
    /// Alive, before the claiming age
    NotYetClaiming,
    /// Alive and drawing their own (or spousal-elected) benefit
    Claiming,
    /// Alive, drawing the survivor-floored benefit after the partner's death
    SurvivorClaiming,
    /// Past the life-expectancy cutoff
    Deceased,
}

/// Immutable per-claimant inputs resolved at simulation start
#[derive(Debug, Clone)]
pub struct ClaimantTrack {
    /// Age at which this claimant starts drawing
    pub claiming_age: f64,

    /// Monthly amount at claim time: COLA-projected, age-adjusted, and
    /// spousal-resolved
    pub monthly_at_claim: f64,

    /// Deterministic mortality cutoff on this claimant's own age axis
    pub life_expectancy_age: f64,
}

impl ClaimantTrack {
    /// Phase at a given age on this claimant's own age axis
    pub fn phase_at(&self, age: f64, partner_deceased: bool) -> ClaimantPhase {
        if age > self.life_expectancy_age {
            ClaimantPhase::Deceased
        } else if age < self.claiming_age {
            ClaimantPhase::NotYetClaiming
        } else if partner_deceased {
            ClaimantPhase::SurvivorClaiming
        } else {
            ClaimantPhase::Claiming
        }
    }

    /// The claimant's own annual benefit at a given age: zero before claiming
    /// or after death, otherwise the claim-time amount compounded by whole
    /// years since their own claim.
    pub fn own_annual_benefit(&self, age: f64, cola_rate: f64) -> f64 {
        if age < self.claiming_age || age > self.life_expectancy_age {
            return 0.0;
        }
        self.ongoing_stream(age, cola_rate)
    }

    /// The annual value of this claimant's stream at a given calendar-aligned
    /// age, ignoring mortality. Used for the deceased partner's stream when
    /// computing the survivor floor.
    pub fn ongoing_stream(&self, age: f64, cola_rate: f64) -> f64 {
        if age < self.claiming_age {
            return 0.0;
        }
        let years_since_claim = (age - self.claiming_age).floor() as u32;
        cola::compound(self.monthly_at_claim * 12.0, cola_rate, years_since_claim)
    }

    /// Whether this claimant ever actually claimed before the mortality
    /// cutoff. A partner who died before claiming leaves no stream to
    /// survive into.
    pub fn claimed_before_death(&self) -> bool {
        self.claiming_age <= self.life_expectancy_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn track() -> ClaimantTrack {
        ClaimantTrack {
            claiming_age: 67.0,
            monthly_at_claim: 2000.0,
            life_expectancy_age: 85.0,
        }
    }

    #[test]
    fn test_phase_transitions() {
        let t = track();
        assert_eq!(t.phase_at(62.0, false), ClaimantPhase::NotYetClaiming);
        assert_eq!(t.phase_at(67.0, false), ClaimantPhase::Claiming);
        assert_eq!(t.phase_at(70.0, true), ClaimantPhase::SurvivorClaiming);
        assert_eq!(t.phase_at(86.0, false), ClaimantPhase::Deceased);
        // Not yet claiming even if the partner has died
        assert_eq!(t.phase_at(65.0, true), ClaimantPhase::NotYetClaiming);
    }

    #[test]
    fn test_benefit_zero_outside_claiming_window() {
        let t = track();
        assert_eq!(t.own_annual_benefit(66.0, 0.02), 0.0);
        assert_eq!(t.own_annual_benefit(86.0, 0.02), 0.0);
    }

    #[test]
    fn test_compounding_resets_to_own_claim_year() {
        let t = track();
        assert_relative_eq!(t.own_annual_benefit(67.0, 0.02), 24_000.0, max_relative = 1e-12);
        assert_relative_eq!(
            t.own_annual_benefit(70.0, 0.02),
            24_000.0 * 1.02f64.powi(3),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_deceased_stream_keeps_compounding() {
        let t = track();
        // Stream value past the cutoff, for survivor-floor purposes
        assert_relative_eq!(
            t.ongoing_stream(90.0, 0.02),
            24_000.0 * 1.02f64.powi(23),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_claimed_before_death() {
        let mut t = track();
        assert!(t.claimed_before_death());
        t.life_expectancy_age = 66.0;
        assert!(!t.claimed_before_death());
    }
}
