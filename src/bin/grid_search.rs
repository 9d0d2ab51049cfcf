//! Exhaustive claiming-age grid search for a married household
//!
//! Writes every grid cell to CSV and prints the best-scoring pair

use anyhow::Context;
use clap::Parser;
use claiming_optimizer::{Claimant, HouseholdParams, StrategyComparator};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Exhaustive claiming-age grid search for a married household")]
struct Args {
    /// Primary claimant's reference monthly benefit
    #[arg(long, default_value_t = 2500.0)]
    primary_pia: f64,

    /// Spouse's reference monthly benefit
    #[arg(long, default_value_t = 1800.0)]
    spouse_pia: f64,

    /// Primary claimant's current age
    #[arg(long, default_value_t = 62.0)]
    primary_age: f64,

    /// Spouse's current age
    #[arg(long, default_value_t = 62.0)]
    spouse_age: f64,

    /// Primary claimant's life expectancy age
    #[arg(long, default_value_t = 90.0)]
    primary_life_expectancy: f64,

    /// Spouse's life expectancy age
    #[arg(long, default_value_t = 95.0)]
    spouse_life_expectancy: f64,

    /// Reference ("full") age for both claimants
    #[arg(long, default_value_t = 67.0)]
    reference_age: f64,

    /// Annual COLA rate
    #[arg(long, default_value_t = 0.0254)]
    cola: f64,

    /// Output CSV path
    #[arg(long, default_value = "grid_search_output.csv")]
    out: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = HouseholdParams::married(
        Claimant::new(
            args.primary_pia,
            args.reference_age,
            args.primary_age,
            args.primary_life_expectancy,
        ),
        Claimant::new(
            args.spouse_pia,
            args.reference_age,
            args.spouse_age,
            args.spouse_life_expectancy,
        ),
    )
    .with_cola_rate(args.cola);

    let comparator = StrategyComparator::new(params);

    println!("Running exhaustive grid search...");
    let start = Instant::now();
    let grid = comparator.search_grid()?;
    let best = comparator.exhaustive_search()?;
    println!("Searched {} cells in {:?}", grid.len(), start.elapsed());

    let mut file = File::create(&args.out)
        .with_context(|| format!("failed to create {}", args.out))?;
    writeln!(file, "PrimaryAge,SpouseAge,LifetimeBenefits,SurvivorPeriodTotal,Score")?;
    for cell in &grid {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2}",
            cell.primary_claiming_age,
            cell.spouse_claiming_age,
            cell.lifetime_benefits,
            cell.survivor_period_total,
            cell.score,
        )?;
    }
    println!("Grid written to {}", args.out);

    println!("\nBest claiming-age pair:");
    println!("  Primary claims at {:.0}", best.primary_claiming_age);
    if let Some(age) = best.spouse_claiming_age {
        println!("  Spouse claims at  {:.0}", age);
    }
    println!("  Combined monthly at claim: ${:.2}", best.combined_monthly_at_claim);
    println!("  Lifetime benefits:         ${:.2}", best.lifetime_benefits);
    println!("  After-tax lifetime:        ${:.2}", best.after_tax_lifetime_benefits);

    Ok(())
}
