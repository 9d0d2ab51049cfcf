//! Rank jurisdictions by after-tax value of a fixed annual benefit

use anyhow::Context;
use clap::Parser;
use claiming_optimizer::{rank_states_by_after_tax, FilingStatus, TaxRuleTable};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Rank jurisdictions by after-tax annual benefit value")]
struct Args {
    /// Annual benefit amount to rank
    #[arg(long, default_value_t = 36_000.0)]
    annual_benefit: f64,

    /// Fixed non-benefit annual income
    #[arg(long, default_value_t = 30_000.0)]
    other_income: f64,

    /// Use married-filing-jointly federal thresholds
    #[arg(long)]
    married: bool,

    /// Path to the tax-rule CSV (defaults to data/tax_rules.csv)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Emit the ranking as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let table = match &args.rules {
        Some(path) => TaxRuleTable::from_csv_path(path)
            .map_err(|e| anyhow::anyhow!("failed to load tax rules from {}: {e}", path.display()))?,
        None => TaxRuleTable::from_csv()
            .map_err(|e| anyhow::anyhow!("failed to load default tax rules: {e}"))?,
    };

    let filing_status = if args.married {
        FilingStatus::MarriedFilingJointly
    } else {
        FilingStatus::Single
    };

    let rules: Vec<_> = table.rules().cloned().collect();
    let rankings = rank_states_by_after_tax(
        args.annual_benefit,
        &rules,
        filing_status,
        args.other_income,
    );

    if args.json {
        let out = serde_json::to_string_pretty(&rankings).context("serializing rankings")?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "After-tax ranking of ${:.2} annual benefit ({} jurisdictions):\n",
        args.annual_benefit,
        rankings.len()
    );
    println!("{:>4} {:>6} {:>12} {:>14}", "Rank", "State", "Tax", "AfterTax");
    println!("{}", "-".repeat(40));
    for (rank, row) in rankings.iter().enumerate() {
        println!(
            "{:>4} {:>6} {:>12.2} {:>14.2}",
            rank + 1,
            row.jurisdiction,
            row.tax_amount,
            row.after_tax_benefit,
        );
    }

    Ok(())
}
