//! Claiming Optimizer CLI
//!
//! Runs the canonical strategy comparison for a sample household

use claiming_optimizer::{
    compare_strategies, rank_strategies_by_after_tax, Claimant, ClaimingStrategy, HouseholdParams,
    TaxRuleTable,
};

fn print_strategy(strategy: &ClaimingStrategy) {
    let spouse_age = strategy
        .spouse_claiming_age
        .map(|a| format!("{a:.0}"))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{:>12} {:>8.0} {:>8} {:>12.2} {:>14.2} {:>14.2} {:>10.0}",
        strategy.name,
        strategy.primary_claiming_age,
        spouse_age,
        strategy.combined_monthly_at_claim,
        strategy.lifetime_benefits,
        strategy.after_tax_lifetime_benefits,
        strategy.break_even_age,
    );
}

fn main() {
    env_logger::init();

    println!("Claiming Optimizer v0.1.0");
    println!("=========================\n");

    // Sample household: higher-PIA primary, both with long horizons
    let mut params = HouseholdParams::married(
        Claimant::new(2500.0, 67.0, 62.0, 90.0),
        Claimant::new(1800.0, 67.0, 60.0, 95.0),
    );

    // Attach a state tax rule when the default table is present
    if let Ok(table) = TaxRuleTable::from_csv() {
        if let Ok(rule) = table.require("CO") {
            params = params.with_tax_rule(rule);
        }
    }

    println!("Household:");
    println!("  Primary: PIA ${:.2}, reference age {:.0}, current age {:.0}, life expectancy {:.0}",
        params.primary.base_pia,
        params.primary.reference_age,
        params.primary.current_age,
        params.primary.life_expectancy_age,
    );
    if let Some(spouse) = params.spouse() {
        println!("  Spouse:  PIA ${:.2}, reference age {:.0}, current age {:.0}, life expectancy {:.0}",
            spouse.base_pia,
            spouse.reference_age,
            spouse.current_age,
            spouse.life_expectancy_age,
        );
    }
    println!("  COLA rate: {:.2}%\n", params.cola_rate * 100.0);

    let result = compare_strategies(&params).expect("comparison failed for sample household");

    println!(
        "{:>12} {:>8} {:>8} {:>12} {:>14} {:>14} {:>10}",
        "Strategy", "Primary", "Spouse", "Monthly", "Lifetime", "AfterTax", "BreakEven"
    );
    println!("{}", "-".repeat(84));
    print_strategy(&result.earliest);
    print_strategy(&result.balanced);
    print_strategy(&result.optimal);

    let strategies = [
        result.earliest.clone(),
        result.balanced.clone(),
        result.optimal.clone(),
    ];
    println!("\nAfter-tax ranking:");
    for (rank, row) in rank_strategies_by_after_tax(&strategies).iter().enumerate() {
        println!(
            "  {}. {:<10} after-tax ${:.2} (lifetime tax ${:.2})",
            rank + 1,
            row.strategy_name,
            row.after_tax_lifetime_benefits,
            row.lifetime_tax,
        );
    }

    println!("\nBalanced advantage vs Earliest: ${:.2}", result.balanced_advantage);
    println!("Optimal advantage vs Earliest:  ${:.2}", result.optimal_advantage);
    println!("\n{}", result.recommendation);

    // First years of the optimal stream for inspection
    println!("\nOptimal strategy, first 10 years:");
    println!(
        "{:>5} {:>14} {:>14} {:>14} {:>16} {:>9}",
        "Age", "Primary", "Spouse", "Total", "Cumulative", "Survivor"
    );
    for record in result.optimal.benefits_by_age.iter().take(10) {
        println!(
            "{:>5.0} {:>14.2} {:>14.2} {:>14.2} {:>16.2} {:>9}",
            record.age,
            record.primary_benefit,
            record.spouse_benefit,
            record.total_benefit,
            record.cumulative_benefit,
            record.is_survivor_active,
        );
    }
    let remaining = result.optimal.benefits_by_age.len().saturating_sub(10);
    if remaining > 0 {
        println!("... ({remaining} more years)");
    }
}
