//! Strategy comparison and exhaustive claiming-age search
//!
//! Two modes: a canonical three-strategy comparison (Earliest / Balanced /
//! Optimal) with break-evens and a templated recommendation, and an
//! exhaustive grid search over every claiming-age pair for married
//! households. Grid cells are independent simulations, so the search runs as
//! a rayon parallel map merged by a max-score reduction with a deterministic
//! tie-break.

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::constants::{
    round_cents, MAX_CLAIMING_AGE, MIN_CLAIMING_AGE, MODERATE_ADVANTAGE_THRESHOLD,
    SCORE_LIFETIME_WEIGHT, SCORE_SURVIVOR_WEIGHT, STRONG_ADVANTAGE_THRESHOLD,
};
use crate::error::OptimizerError;
use crate::household::HouseholdParams;
use crate::simulation::{ClaimingStrategy, HouseholdBenefitSimulator};

use super::breakeven::find_break_even;

/// Result of the canonical three-strategy comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparisonResult {
    /// Both claimants take the benefit at the earliest claimable age
    pub earliest: ClaimingStrategy,
    /// Both claimants wait for their own reference age
    pub balanced: ClaimingStrategy,
    /// The higher-PIA claimant delays to the maximum age to raise the
    /// survivor floor; the lower-PIA claimant takes the earliest age
    pub optimal: ClaimingStrategy,
    /// Caller-supplied strategy, when one was requested
    pub custom: Option<ClaimingStrategy>,

    /// Lifetime deltas against the Earliest strategy
    pub balanced_advantage: f64,
    pub optimal_advantage: f64,

    /// Templated natural-language summary driven by the advantage thresholds
    pub recommendation: String,
}

/// Weighted score used by the exhaustive search: lifetime value plus a
/// survivor-protection term
pub fn search_score(strategy: &ClaimingStrategy) -> f64 {
    SCORE_LIFETIME_WEIGHT * strategy.lifetime_benefits
        + SCORE_SURVIVOR_WEIGHT * strategy.survivor_period_total()
}

/// One cell of the exhaustive claiming-age grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridCell {
    pub primary_claiming_age: u32,
    pub spouse_claiming_age: u32,
    pub lifetime_benefits: f64,
    pub survivor_period_total: f64,
    pub score: f64,
}

/// Every integer claiming-age pair on the search grid, in the order that
/// defines the tie-break: lower primary age first, then lower spouse age
fn claiming_age_pairs() -> Vec<(u32, u32)> {
    let min = MIN_CLAIMING_AGE as u32;
    let max = MAX_CLAIMING_AGE as u32;
    (min..=max)
        .flat_map(|p| (min..=max).map(move |s| (p, s)))
        .collect()
}

/// Drives the simulator over canonical strategies and the exhaustive grid
pub struct StrategyComparator {
    simulator: HouseholdBenefitSimulator,
}

impl StrategyComparator {
    pub fn new(params: HouseholdParams) -> Self {
        Self {
            simulator: HouseholdBenefitSimulator::new(params),
        }
    }

    fn params(&self) -> &HouseholdParams {
        self.simulator.params()
    }

    fn spouse_age_or_none(&self, age: f64) -> Option<f64> {
        if self.params().is_married {
            Some(age)
        } else {
            None
        }
    }

    /// Simulate the three canonical strategies, compute break-evens against
    /// Earliest, and emit the recommendation
    pub fn compare(&self) -> Result<StrategyComparisonResult, OptimizerError> {
        self.compare_with_custom(None)
    }

    /// Canonical comparison with an optional caller-defined strategy
    /// (primary claiming age, spouse claiming age when married)
    pub fn compare_with_custom(
        &self,
        custom_ages: Option<(f64, Option<f64>)>,
    ) -> Result<StrategyComparisonResult, OptimizerError> {
        let params = self.params();

        let earliest = self
            .simulator
            .simulate(MIN_CLAIMING_AGE, self.spouse_age_or_none(MIN_CLAIMING_AGE))?
            .labeled(
                "Earliest",
                "Both claimants take the benefit at the earliest claimable age",
            );

        let balanced_spouse_age = params.spouse().map(|s| s.reference_age);
        let mut balanced = self
            .simulator
            .simulate(params.primary.reference_age, balanced_spouse_age)?
            .labeled("Balanced", "Both claimants wait for their own reference age");

        let (optimal_primary_age, optimal_spouse_age) = if params.is_married {
            if params.primary_has_higher_pia() {
                (MAX_CLAIMING_AGE, Some(MIN_CLAIMING_AGE))
            } else {
                (MIN_CLAIMING_AGE, Some(MAX_CLAIMING_AGE))
            }
        } else {
            (MAX_CLAIMING_AGE, None)
        };
        let mut optimal = self
            .simulator
            .simulate(optimal_primary_age, optimal_spouse_age)?
            .labeled(
                "Optimal",
                "The higher-benefit claimant delays to the maximum age to lift the survivor floor",
            );

        balanced.break_even_age = find_break_even(&earliest, &balanced);
        optimal.break_even_age = find_break_even(&earliest, &optimal);

        let custom = match custom_ages {
            Some((primary_age, spouse_age)) => {
                let mut strategy = self
                    .simulator
                    .simulate(primary_age, spouse_age)?
                    .labeled("Custom", "Caller-specified claiming ages");
                strategy.break_even_age = find_break_even(&earliest, &strategy);
                Some(strategy)
            }
            None => None,
        };

        let balanced_advantage =
            round_cents(balanced.lifetime_benefits - earliest.lifetime_benefits);
        let optimal_advantage = round_cents(optimal.lifetime_benefits - earliest.lifetime_benefits);

        let recommendation = recommend(&optimal, optimal_advantage);
        debug!(
            "canonical comparison: balanced +{balanced_advantage:.0}, optimal +{optimal_advantage:.0}"
        );

        Ok(StrategyComparisonResult {
            earliest,
            balanced,
            optimal,
            custom,
            balanced_advantage,
            optimal_advantage,
            recommendation,
        })
    }

    /// Every claiming-age pair on the discrete grid, in generation order
    /// (lower primary age first, then lower spouse age). Married only.
    pub fn search_grid(&self) -> Result<Vec<GridCell>, OptimizerError> {
        if !self.params().is_married {
            return Err(OptimizerError::SearchRequiresSpouse);
        }

        let pairs = claiming_age_pairs();

        // Indexed parallel collect preserves generation order
        pairs
            .par_iter()
            .map(|&(primary_age, spouse_age)| {
                let strategy = self
                    .simulator
                    .simulate(primary_age as f64, Some(spouse_age as f64))?;
                Ok(GridCell {
                    primary_claiming_age: primary_age,
                    spouse_claiming_age: spouse_age,
                    lifetime_benefits: strategy.lifetime_benefits,
                    survivor_period_total: round_cents(strategy.survivor_period_total()),
                    score: round_cents(search_score(&strategy)),
                })
            })
            .collect::<Result<Vec<_>, OptimizerError>>()
    }

    /// Exhaustive search over the claiming-age grid (married only).
    ///
    /// Cells are scored `0.6 * lifetime + 0.4 * survivor-period total` and
    /// merged by a max-score reduction. Ties break to the cell generated
    /// first: lower primary age, then lower spouse age. Selection on
    /// `(score, reversed index)` is associative, so the parallel reduction
    /// is deterministic regardless of work splitting.
    pub fn exhaustive_search(&self) -> Result<ClaimingStrategy, OptimizerError> {
        if !self.params().is_married {
            return Err(OptimizerError::SearchRequiresSpouse);
        }

        let pairs = claiming_age_pairs();
        let cell_count = pairs.len();

        struct Scored {
            index: usize,
            score: f64,
            strategy: ClaimingStrategy,
        }

        let best = pairs
            .par_iter()
            .enumerate()
            .map(|(index, &(primary_age, spouse_age))| {
                let strategy = self
                    .simulator
                    .simulate(primary_age as f64, Some(spouse_age as f64))?;
                Ok(Scored {
                    index,
                    score: search_score(&strategy),
                    strategy,
                })
            })
            .reduce_with(|a, b| {
                let (a, b) = (a?, b?);
                if b.score > a.score || (b.score == a.score && b.index < a.index) {
                    Ok(b)
                } else {
                    Ok(a)
                }
            })
            .transpose()?
            .expect("claiming-age grid is never empty");

        info!(
            "exhaustive search over {cell_count} cells: best primary@{} spouse@{:?} score {:.0}",
            best.strategy.primary_claiming_age, best.strategy.spouse_claiming_age, best.score
        );

        Ok(best.strategy.labeled(
            "Grid Optimal",
            "Highest-scoring claiming-age pair from the exhaustive search",
        ))
    }
}

/// Templated recommendation driven purely by the advantage thresholds
fn recommend(optimal: &ClaimingStrategy, optimal_advantage: f64) -> String {
    let spouse_note = match optimal.spouse_claiming_age {
        Some(age) => format!(
            " while the other claims at {age:.0}"
        ),
        None => String::new(),
    };

    if optimal_advantage > STRONG_ADVANTAGE_THRESHOLD {
        format!(
            "Delaying the larger benefit to age {:.0}{spouse_note} is strongly recommended: \
             it adds ${:.0} in lifetime benefits over claiming at the earliest age, \
             breaking even at age {:.0}.",
            optimal.primary_claiming_age.max(
                optimal.spouse_claiming_age.unwrap_or(optimal.primary_claiming_age)
            ),
            optimal_advantage,
            optimal.break_even_age
        )
    } else if optimal_advantage > MODERATE_ADVANTAGE_THRESHOLD {
        format!(
            "Delaying the larger benefit{spouse_note} is worth considering: \
             it adds ${:.0} in lifetime benefits, breaking even at age {:.0}.",
            optimal_advantage, optimal.break_even_age
        )
    } else {
        format!(
            "Claiming at the earliest age is competitive for this household: \
             delaying adds only ${:.0} over the simulated horizon.",
            optimal_advantage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::Claimant;

    fn married_params() -> HouseholdParams {
        HouseholdParams::married(
            Claimant::new(2500.0, 67.0, 62.0, 95.0),
            Claimant::new(1800.0, 67.0, 62.0, 95.0),
        )
        .with_cola_rate(0.0)
        .with_other_income(0.0)
    }

    #[test]
    fn test_optimal_assigns_delay_to_higher_pia() {
        let comparator = StrategyComparator::new(married_params());
        let result = comparator.compare().unwrap();

        assert_eq!(result.optimal.primary_claiming_age, 70.0);
        assert_eq!(result.optimal.spouse_claiming_age, Some(62.0));
    }

    #[test]
    fn test_optimal_swaps_when_spouse_has_higher_pia() {
        let params = HouseholdParams::married(
            Claimant::new(1800.0, 67.0, 62.0, 95.0),
            Claimant::new(2500.0, 67.0, 62.0, 95.0),
        )
        .with_cola_rate(0.0)
        .with_other_income(0.0);
        let comparator = StrategyComparator::new(params);
        let result = comparator.compare().unwrap();

        assert_eq!(result.optimal.primary_claiming_age, 62.0);
        assert_eq!(result.optimal.spouse_claiming_age, Some(70.0));
    }

    #[test]
    fn test_canonical_strategies_for_single_household() {
        let params = HouseholdParams::single(Claimant::new(2000.0, 67.0, 62.0, 90.0))
            .with_cola_rate(0.0)
            .with_other_income(0.0);
        let comparator = StrategyComparator::new(params);
        let result = comparator.compare().unwrap();

        assert_eq!(result.earliest.primary_claiming_age, 62.0);
        assert_eq!(result.balanced.primary_claiming_age, 67.0);
        assert_eq!(result.optimal.primary_claiming_age, 70.0);
        assert!(result.earliest.spouse_claiming_age.is_none());
        assert!(!result.recommendation.is_empty());
    }

    #[test]
    fn test_break_even_computed_against_earliest() {
        let comparator = StrategyComparator::new(married_params());
        let result = comparator.compare().unwrap();

        assert!(result.balanced.break_even_age > 0.0);
        assert!(result.optimal.break_even_age > 0.0);
        // Earliest has no comparison target, so its sentinel stays unset
        assert_eq!(result.earliest.break_even_age, 0.0);
    }

    #[test]
    fn test_custom_strategy_included_when_requested() {
        let comparator = StrategyComparator::new(married_params());
        let result = comparator
            .compare_with_custom(Some((65.0, Some(64.0))))
            .unwrap();

        let custom = result.custom.expect("custom strategy requested");
        assert_eq!(custom.primary_claiming_age, 65.0);
        assert_eq!(custom.spouse_claiming_age, Some(64.0));
    }

    #[test]
    fn test_search_requires_married_household() {
        let params = HouseholdParams::single(Claimant::new(2000.0, 67.0, 62.0, 90.0));
        let comparator = StrategyComparator::new(params);
        assert!(matches!(
            comparator.exhaustive_search(),
            Err(OptimizerError::SearchRequiresSpouse)
        ));
    }

    #[test]
    fn test_grid_covers_all_pairs_in_order() {
        let comparator = StrategyComparator::new(married_params());
        let grid = comparator.search_grid().unwrap();

        assert_eq!(grid.len(), 81);
        assert_eq!(grid[0].primary_claiming_age, 62);
        assert_eq!(grid[0].spouse_claiming_age, 62);
        assert_eq!(grid[80].primary_claiming_age, 70);
        assert_eq!(grid[80].spouse_claiming_age, 70);
        // Generation order: primary outer, spouse inner
        assert_eq!(grid[9].primary_claiming_age, 63);
        assert_eq!(grid[9].spouse_claiming_age, 62);
    }

    #[test]
    fn test_search_optimum_beats_canonical_strategies() {
        let comparator = StrategyComparator::new(married_params());
        let result = comparator.compare().unwrap();
        let best = comparator.exhaustive_search().unwrap();

        let best_score = search_score(&best);
        assert!(best_score >= search_score(&result.earliest));
        assert!(best_score >= search_score(&result.balanced));
        assert!(best_score >= search_score(&result.optimal));
    }

    #[test]
    fn test_pair_generation_order_defines_tie_break() {
        let pairs = claiming_age_pairs();
        assert_eq!(pairs.len(), 81);
        assert_eq!(pairs[0], (62, 62));
        assert_eq!(pairs[8], (62, 70));
        assert_eq!(pairs[9], (63, 62));
        assert_eq!(pairs[80], (70, 70));
    }

    fn optimal_for_recommendation() -> ClaimingStrategy {
        let comparator = StrategyComparator::new(married_params());
        comparator.compare().unwrap().optimal
    }

    #[test]
    fn test_recommendation_strong_above_upper_threshold() {
        let text = recommend(&optimal_for_recommendation(), 150_000.0);
        assert!(text.contains("strongly recommended"), "got: {text}");
    }

    #[test]
    fn test_recommendation_moderate_between_thresholds() {
        let text = recommend(&optimal_for_recommendation(), 50_000.0);
        assert!(text.contains("worth considering"), "got: {text}");
    }

    #[test]
    fn test_recommendation_competitive_below_lower_threshold() {
        let text = recommend(&optimal_for_recommendation(), 10_000.0);
        assert!(text.contains("competitive"), "got: {text}");
    }

    #[test]
    fn test_search_is_deterministic() {
        let comparator = StrategyComparator::new(married_params());
        let first = comparator.exhaustive_search().unwrap();
        let second = comparator.exhaustive_search().unwrap();

        assert_eq!(first.primary_claiming_age, second.primary_claiming_age);
        assert_eq!(first.spouse_claiming_age, second.spouse_claiming_age);
        assert_eq!(first.lifetime_benefits, second.lifetime_benefits);
    }
}
