//! Jurisdiction tax-rule collaborator
//!
//! The core consumes tax rules as pure, synchronous lookups; it never fetches
//! or persists them itself. `TaxRuleTable` is the default in-process source,
//! loadable from `data/tax_rules.csv`.

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OptimizerError;

/// Default path to the jurisdiction tax-rule table
pub const DEFAULT_TAX_RULES_PATH: &str = "data/tax_rules.csv";

/// State/jurisdiction treatment of the benefit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRule {
    /// Jurisdiction code (e.g. two-letter state code)
    #[serde(rename = "Jurisdiction")]
    pub jurisdiction: String,

    /// Whether this jurisdiction taxes the benefit at all
    #[serde(rename = "BenefitsTaxable")]
    pub benefits_taxable: bool,

    /// Annual benefit amount exempt from state tax
    #[serde(rename = "ExemptionThreshold")]
    pub exemption_threshold: f64,

    /// State rate applied to the benefit above the exemption
    #[serde(rename = "BaseRate")]
    pub base_rate: f64,
}

impl TaxRule {
    /// A jurisdiction that does not tax the benefit
    pub fn exempt(jurisdiction: &str) -> Self {
        Self {
            jurisdiction: jurisdiction.to_string(),
            benefits_taxable: false,
            exemption_threshold: 0.0,
            base_rate: 0.0,
        }
    }
}

/// Lookup source for jurisdiction tax rules
pub trait TaxRuleSource {
    fn rule_for(&self, jurisdiction: &str) -> Option<&TaxRule>;
}

/// In-memory tax-rule table keyed by jurisdiction code
#[derive(Debug, Clone, Default)]
pub struct TaxRuleTable {
    rules: HashMap<String, TaxRule>,
}

impl TaxRuleTable {
    /// Build a table from a list of rules
    pub fn from_rules(rules: Vec<TaxRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|r| (r.jurisdiction.clone(), r))
                .collect(),
        }
    }

    /// Load the table from the default location
    pub fn from_csv() -> Result<Self, Box<dyn Error>> {
        Self::from_csv_path(Path::new(DEFAULT_TAX_RULES_PATH))
    }

    /// Load the table from a specific CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut rules = Vec::new();
        for result in reader.deserialize() {
            let rule: TaxRule = result?;
            rules.push(rule);
        }

        Ok(Self::from_rules(rules))
    }

    /// All rules, in arbitrary order
    pub fn rules(&self) -> impl Iterator<Item = &TaxRule> {
        self.rules.values()
    }

    /// Lookup that treats an unknown jurisdiction as an error
    pub fn require(&self, jurisdiction: &str) -> Result<TaxRule, OptimizerError> {
        self.rules
            .get(jurisdiction)
            .cloned()
            .ok_or_else(|| OptimizerError::UnknownJurisdiction(jurisdiction.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TaxRuleSource for TaxRuleTable {
    fn rule_for(&self, jurisdiction: &str) -> Option<&TaxRule> {
        self.rules.get(jurisdiction)
    }
}
