//! Household and claimant value objects
//!
//! All entities are built fresh per computation request and never mutated by
//! the core afterwards. Mortality is modeled only as "alive while age is at
//! or below the life expectancy age" - a deterministic proxy, not an event.

use serde::{Deserialize, Serialize};

use crate::assumptions::constants::{DEFAULT_COLA_RATE, DEFAULT_OTHER_ANNUAL_INCOME};
use crate::tax::TaxRule;

/// Tax filing status, selects the federal provisional-income thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
}

/// One claimant of the age-gated benefit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claimant {
    /// Reference monthly benefit at the reference age (PIA)
    pub base_pia: f64,

    /// Age at which the benefit multiplier is exactly 1.0 (typically 66-67)
    pub reference_age: f64,

    /// Current age at simulation start
    pub current_age: f64,

    /// Deterministic mortality cutoff: alive while age <= this
    pub life_expectancy_age: f64,
}

impl Claimant {
    pub fn new(base_pia: f64, reference_age: f64, current_age: f64, life_expectancy_age: f64) -> Self {
        debug_assert!(base_pia >= 0.0);
        Self {
            base_pia,
            reference_age,
            current_age,
            life_expectancy_age,
        }
    }

    /// Whether the claimant is alive at a given age on their own age axis
    pub fn alive_at(&self, age: f64) -> bool {
        age <= self.life_expectancy_age
    }
}

/// Full parameter set for one household computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseholdParams {
    pub primary: Claimant,

    /// Present and meaningful only when `is_married`
    pub spouse: Option<Claimant>,

    pub is_married: bool,

    /// Annual COLA rate applied before and after claiming
    pub cola_rate: f64,

    pub filing_status: FilingStatus,

    /// Fixed non-benefit annual income assumed for the after-tax model.
    /// An acknowledged simplification: held constant over the horizon.
    pub other_annual_income: f64,

    /// Resolved state tax rule for the household's jurisdiction, if any
    pub tax_rule: Option<TaxRule>,
}

impl HouseholdParams {
    /// Single-claimant household with default COLA and income assumptions
    pub fn single(primary: Claimant) -> Self {
        Self {
            primary,
            spouse: None,
            is_married: false,
            cola_rate: DEFAULT_COLA_RATE,
            filing_status: FilingStatus::Single,
            other_annual_income: DEFAULT_OTHER_ANNUAL_INCOME,
            tax_rule: None,
        }
    }

    /// Married household with default COLA and income assumptions
    pub fn married(primary: Claimant, spouse: Claimant) -> Self {
        Self {
            primary,
            spouse: Some(spouse),
            is_married: true,
            cola_rate: DEFAULT_COLA_RATE,
            filing_status: FilingStatus::MarriedFilingJointly,
            other_annual_income: DEFAULT_OTHER_ANNUAL_INCOME,
            tax_rule: None,
        }
    }

    /// Override the COLA rate
    pub fn with_cola_rate(mut self, cola_rate: f64) -> Self {
        self.cola_rate = cola_rate;
        self
    }

    /// Override the assumed non-benefit income
    pub fn with_other_income(mut self, other_annual_income: f64) -> Self {
        self.other_annual_income = other_annual_income;
        self
    }

    /// Attach the household's state tax rule
    pub fn with_tax_rule(mut self, rule: TaxRule) -> Self {
        self.tax_rule = Some(rule);
        self
    }

    /// Spouse record when the household is married
    pub fn spouse(&self) -> Option<&Claimant> {
        if self.is_married {
            self.spouse.as_ref()
        } else {
            None
        }
    }

    /// Whether the primary claimant carries the higher reference benefit.
    /// Ties go to the primary.
    pub fn primary_has_higher_pia(&self) -> bool {
        match self.spouse() {
            Some(spouse) => self.primary.base_pia >= spouse.base_pia,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alive_cutoff_is_inclusive() {
        let claimant = Claimant::new(2000.0, 67.0, 62.0, 85.0);
        assert!(claimant.alive_at(85.0));
        assert!(!claimant.alive_at(86.0));
    }

    #[test]
    fn test_single_household_has_no_spouse() {
        let params = HouseholdParams::single(Claimant::new(2000.0, 67.0, 62.0, 90.0));
        assert!(params.spouse().is_none());
        assert!(params.primary_has_higher_pia());
        assert_eq!(params.filing_status, FilingStatus::Single);
    }

    #[test]
    fn test_higher_pia_detection() {
        let params = HouseholdParams::married(
            Claimant::new(1800.0, 67.0, 62.0, 90.0),
            Claimant::new(2500.0, 67.0, 62.0, 90.0),
        );
        assert!(!params.primary_has_higher_pia());
    }
}
