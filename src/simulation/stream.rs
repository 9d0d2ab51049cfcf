//! Benefit stream output structures

use serde::{Deserialize, Serialize};

use crate::assumptions::constants::round_cents;

/// One simulated year of household benefits
///
/// `age` is the primary claimant's age; the spouse advances on the same
/// calendar with their own age offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyBenefitRecord {
    pub age: f64,
    pub primary_benefit: f64,
    pub spouse_benefit: f64,
    pub total_benefit: f64,
    /// Running sum from simulation start
    pub cumulative_benefit: f64,
    pub after_tax_benefit: f64,
    /// True from the first year either claimant's benefit has been replaced
    /// by a survivor benefit, and all following years
    pub is_survivor_active: bool,
}

/// A fully simulated claiming strategy for one household
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimingStrategy {
    pub name: String,
    pub description: String,

    pub primary_claiming_age: f64,
    /// Absent for single households
    pub spouse_claiming_age: Option<f64>,

    /// Monthly amount at claim time, per claimant and combined
    pub primary_monthly_at_claim: f64,
    pub spouse_monthly_at_claim: f64,
    pub combined_monthly_at_claim: f64,
    pub annual_benefit_at_claim: f64,

    /// Sum of all benefits over the simulation horizon
    pub lifetime_benefits: f64,
    pub after_tax_lifetime_benefits: f64,

    /// 0.0 until computed against a comparison strategy
    pub break_even_age: f64,

    pub benefits_by_age: Vec<YearlyBenefitRecord>,
}

impl ClaimingStrategy {
    /// Relabel a simulated strategy before exposing it in a comparison
    pub fn labeled(mut self, name: &str, description: &str) -> Self {
        self.name = name.to_string();
        self.description = description.to_string();
        self
    }

    /// Total benefit paid during survivor-active years
    pub fn survivor_period_total(&self) -> f64 {
        self.benefits_by_age
            .iter()
            .filter(|r| r.is_survivor_active)
            .map(|r| r.total_benefit)
            .sum()
    }

    /// The final cumulative value, or zero for an empty stream
    pub fn final_cumulative(&self) -> f64 {
        self.benefits_by_age
            .last()
            .map(|r| r.cumulative_benefit)
            .unwrap_or(0.0)
    }

    /// First simulated year with a survivor benefit in payment, if any
    pub fn survivor_start_age(&self) -> Option<f64> {
        self.benefits_by_age
            .iter()
            .find(|r| r.is_survivor_active)
            .map(|r| r.age)
    }

    /// Round every monetary field to cents. Called once at the public entry
    /// boundary; intermediate computation stays at full precision.
    pub fn finalize_cents(&mut self) {
        for record in &mut self.benefits_by_age {
            record.primary_benefit = round_cents(record.primary_benefit);
            record.spouse_benefit = round_cents(record.spouse_benefit);
            record.total_benefit = round_cents(record.total_benefit);
            record.cumulative_benefit = round_cents(record.cumulative_benefit);
            record.after_tax_benefit = round_cents(record.after_tax_benefit);
        }
        self.primary_monthly_at_claim = round_cents(self.primary_monthly_at_claim);
        self.spouse_monthly_at_claim = round_cents(self.spouse_monthly_at_claim);
        self.combined_monthly_at_claim = round_cents(self.combined_monthly_at_claim);
        self.annual_benefit_at_claim = round_cents(self.annual_benefit_at_claim);
        self.lifetime_benefits = round_cents(self.lifetime_benefits);
        self.after_tax_lifetime_benefits = round_cents(self.after_tax_lifetime_benefits);
    }
}
