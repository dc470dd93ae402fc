// ============================================================================
// Basic Usage Example
// ============================================================================

use rate_adjuster::prelude::*;
use std::sync::Arc;

fn print_snapshot(snapshot: &CalculatorSnapshot) {
    let show = |v: Option<Rate>| v.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());

    println!("  Official rate:   {} Bs.", show(snapshot.form.official_rate));
    println!("  Parallel rate:   {} Bs.", show(snapshot.form.parallel_rate));
    println!("  Currency gap:    {} Bs.", snapshot.derived.currency_gap);
    println!("  Gap percentage:  {}%", snapshot.derived.gap_percentage);
    println!("  Product price:   {} $", show(snapshot.form.product_price));
    println!("  Price increase:  {} $", snapshot.derived.price_increase);
    println!("  Adjusted price:  {} $", snapshot.derived.adjusted_price);

    if !snapshot.is_valid {
        println!("  WARNING: the official rate should not exceed the parallel rate");
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Rate Adjuster Example ===\n");

    let mut calc = RateCalculatorBuilder::new().build(Arc::new(LoggingEventHandler));

    // The presentation layer feeds raw text per field, exactly as typed
    println!("Entering official=100, parallel=120, price=50...");
    calc.update(RateField::OfficialRate, "100");
    calc.update(RateField::ParallelRate, "120");
    calc.update(RateField::ProductPrice, "50");
    print_snapshot(&calc.snapshot());

    // Inverted rates trigger the non-fatal ordering warning
    println!("\nSwapping the rates (official=120, parallel=100)...");
    calc.update(RateField::OfficialRate, "120");
    calc.update(RateField::ParallelRate, "100");
    print_snapshot(&calc.snapshot());

    // Unparsable text clears a field rather than erroring
    println!("\nTyping garbage into the price field...");
    calc.update(RateField::ProductPrice, "12abc");
    print_snapshot(&calc.snapshot());

    // Explicit reset returns to the initial empty form
    println!("\nResetting the form...");
    calc.reset();
    print_snapshot(&calc.snapshot());
}
