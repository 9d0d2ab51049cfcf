//! Memoizing cache for comparison results
//!
//! Every computation in the core is deterministic, so the natural resource
//! policy at the caller boundary is memoization keyed by the full input
//! parameter set. Monetary inputs key in cents and ages/rates in basis
//! points, which makes the key exact for any input the surrounding
//! application can represent.

use std::collections::HashMap;

use crate::error::OptimizerError;
use crate::household::{Claimant, FilingStatus, HouseholdParams};

use super::comparator::{StrategyComparator, StrategyComparisonResult};

fn cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

fn basis_points(rate: f64) -> i64 {
    (rate * 10_000.0).round() as i64
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ClaimantKey {
    pia_cents: i64,
    reference_age_bp: i64,
    current_age_bp: i64,
    life_expectancy_bp: i64,
}

impl ClaimantKey {
    fn from_claimant(claimant: &Claimant) -> Self {
        Self {
            pia_cents: cents(claimant.base_pia),
            reference_age_bp: basis_points(claimant.reference_age),
            current_age_bp: basis_points(claimant.current_age),
            life_expectancy_bp: basis_points(claimant.life_expectancy_age),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HouseholdKey {
    primary: ClaimantKey,
    spouse: Option<ClaimantKey>,
    is_married: bool,
    cola_bp: i64,
    filing_status: FilingStatus,
    other_income_cents: i64,
    jurisdiction: Option<String>,
}

impl HouseholdKey {
    fn from_params(params: &HouseholdParams) -> Self {
        Self {
            primary: ClaimantKey::from_claimant(&params.primary),
            spouse: params.spouse.as_ref().map(ClaimantKey::from_claimant),
            is_married: params.is_married,
            cola_bp: basis_points(params.cola_rate),
            filing_status: params.filing_status,
            other_income_cents: cents(params.other_annual_income),
            jurisdiction: params.tax_rule.as_ref().map(|r| r.jurisdiction.clone()),
        }
    }
}

/// Caller-boundary memoization of canonical comparisons
#[derive(Debug, Default)]
pub struct ComparisonCache {
    entries: HashMap<HouseholdKey, StrategyComparisonResult>,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

impl ComparisonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached comparison for these parameters, computing and
    /// storing it on first sight
    pub fn compare(
        &mut self,
        params: &HouseholdParams,
    ) -> Result<StrategyComparisonResult, OptimizerError> {
        let key = HouseholdKey::from_params(params);

        if let Some(result) = self.entries.get(&key) {
            self.cache_hits += 1;
            return Ok(result.clone());
        }

        let result = StrategyComparator::new(params.clone()).compare()?;
        self.entries.insert(key, result.clone());
        self.cache_misses += 1;
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cache_hits = 0;
        self.cache_misses = 0;
    }

    /// Fraction of lookups served from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}
