//! After-tax benefit model and jurisdiction ranking
//!
//! Two layers: federal taxability via a provisional-income formula (two
//! filing-status-dependent thresholds exposing 0%, 50%, or 85% of the benefit
//! to the marginal rate), then an optional state tax on the excess of the
//! benefit over a jurisdiction exemption. State rules come from the injected
//! tax-rule collaborator; the core never looks them up on its own.

mod rules;

pub use rules::{TaxRule, TaxRuleSource, TaxRuleTable, DEFAULT_TAX_RULES_PATH};

use serde::{Deserialize, Serialize};

use crate::assumptions::constants::{
    round_cents, DEFAULT_FEDERAL_MARGINAL_RATE, FEDERAL_LOWER_THRESHOLD_MARRIED,
    FEDERAL_LOWER_THRESHOLD_SINGLE, FEDERAL_UPPER_THRESHOLD_MARRIED,
    FEDERAL_UPPER_THRESHOLD_SINGLE, TAXABLE_SHARE_HIGH, TAXABLE_SHARE_MID,
};
use crate::household::FilingStatus;
use crate::simulation::ClaimingStrategy;

/// Federal provisional-income thresholds for a filing status
fn federal_thresholds(filing_status: FilingStatus) -> (f64, f64) {
    match filing_status {
        FilingStatus::Single => (FEDERAL_LOWER_THRESHOLD_SINGLE, FEDERAL_UPPER_THRESHOLD_SINGLE),
        FilingStatus::MarriedFilingJointly => {
            (FEDERAL_LOWER_THRESHOLD_MARRIED, FEDERAL_UPPER_THRESHOLD_MARRIED)
        }
    }
}

/// Share of the benefit exposed to the marginal federal rate.
///
/// Provisional income counts half the benefit on top of other income. Below
/// the lower threshold nothing is taxable; between the thresholds 50% of the
/// benefit is exposed; above the upper threshold 85% is exposed.
pub fn federal_taxable_share(
    annual_benefit: f64,
    other_annual_income: f64,
    filing_status: FilingStatus,
) -> f64 {
    let (lower, upper) = federal_thresholds(filing_status);
    let provisional_income = other_annual_income + 0.5 * annual_benefit;

    if provisional_income <= lower {
        0.0
    } else if provisional_income <= upper {
        TAXABLE_SHARE_MID
    } else {
        TAXABLE_SHARE_HIGH
    }
}

/// Total annual tax (federal + state) on a benefit amount
pub fn annual_tax(
    annual_benefit: f64,
    other_annual_income: f64,
    filing_status: FilingStatus,
    state_rule: Option<&TaxRule>,
) -> f64 {
    let share = federal_taxable_share(annual_benefit, other_annual_income, filing_status);
    let federal_tax = annual_benefit * share * DEFAULT_FEDERAL_MARGINAL_RATE;

    let state_tax = match state_rule {
        Some(rule) if rule.benefits_taxable => {
            (annual_benefit - rule.exemption_threshold).max(0.0) * rule.base_rate
        }
        _ => 0.0,
    };

    federal_tax + state_tax
}

/// Annual benefit net of federal and state tax
pub fn after_tax_benefit(
    annual_benefit: f64,
    other_annual_income: f64,
    filing_status: FilingStatus,
    state_rule: Option<&TaxRule>,
) -> f64 {
    annual_benefit - annual_tax(annual_benefit, other_annual_income, filing_status, state_rule)
}

/// One jurisdiction's after-tax outcome for a fixed annual benefit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTaxRanking {
    pub jurisdiction: String,
    /// Total annual tax in this jurisdiction
    pub tax_amount: f64,
    /// Benefit net of tax in this jurisdiction
    pub after_tax_benefit: f64,
}

/// Rank jurisdictions by after-tax annual value of a fixed benefit.
///
/// Descending after-tax value; ties broken by ascending tax amount, then
/// jurisdiction code for a stable order.
pub fn rank_states_by_after_tax(
    annual_benefit: f64,
    rules: &[TaxRule],
    filing_status: FilingStatus,
    other_annual_income: f64,
) -> Vec<StateTaxRanking> {
    let mut rankings: Vec<StateTaxRanking> = rules
        .iter()
        .map(|rule| {
            let tax = annual_tax(annual_benefit, other_annual_income, filing_status, Some(rule));
            StateTaxRanking {
                jurisdiction: rule.jurisdiction.clone(),
                tax_amount: round_cents(tax),
                after_tax_benefit: round_cents(annual_benefit - tax),
            }
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.after_tax_benefit
            .total_cmp(&a.after_tax_benefit)
            .then(a.tax_amount.total_cmp(&b.tax_amount))
            .then(a.jurisdiction.cmp(&b.jurisdiction))
    });

    rankings
}

/// One strategy's after-tax outcome over the simulated horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyTaxRanking {
    pub strategy_name: String,
    /// Total lifetime tax paid under this strategy
    pub lifetime_tax: f64,
    /// Lifetime benefits net of tax
    pub after_tax_lifetime_benefits: f64,
}

/// Rank simulated strategies by after-tax lifetime value.
///
/// Descending after-tax value; ties broken by ascending lifetime tax, then
/// strategy name for a stable order. Strategies carry their after-tax totals
/// already, so this is a pure reordering.
pub fn rank_strategies_by_after_tax(strategies: &[ClaimingStrategy]) -> Vec<StrategyTaxRanking> {
    let mut rankings: Vec<StrategyTaxRanking> = strategies
        .iter()
        .map(|strategy| StrategyTaxRanking {
            strategy_name: strategy.name.clone(),
            lifetime_tax: round_cents(
                strategy.lifetime_benefits - strategy.after_tax_lifetime_benefits,
            ),
            after_tax_lifetime_benefits: strategy.after_tax_lifetime_benefits,
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.after_tax_lifetime_benefits
            .total_cmp(&a.after_tax_lifetime_benefits)
            .then(a.lifetime_tax.total_cmp(&b.lifetime_tax))
            .then(a.strategy_name.cmp(&b.strategy_name))
    });

    rankings
}
