use colored::Colorize;
use inquire::{Confirm, Text};
use rust_decimal::Decimal;
use tipcalc::prelude::*;

/// Runs the guided prompt flow and returns the calculated tip.
///
/// Input text follows the same rule as the TUI: anything unparseable counts as zero.
pub fn run_wizard_mode(
    calculator: &TipCalculator,
    default_percent: Decimal,
) -> Result<TipBreakdown, Box<dyn std::error::Error>> {
    println!("\n{}", "💰 TIP CALCULATOR 💰".bright_cyan().bold());
    println!("{}", "Press Ctrl+C at any time to exit.".dimmed());
    println!();

    let amount_text = Text::new("Bill amount:")
        .with_placeholder("e.g. 42.50")
        .with_help_message("Leave empty or type anything non-numeric for 0")
        .prompt()?;

    let default_percent = default_percent.normalize().to_string();
    let percent_text = Text::new("Tip percentage:")
        .with_default(&default_percent)
        .prompt()?;

    let round_up = Confirm::new("Round the tip up to a whole amount?")
        .with_default(false)
        .prompt()?;

    let breakdown = calculator.calculate_text(&amount_text, &percent_text, round_up);
    print_breakdown(&breakdown);
    Ok(breakdown)
}

fn print_breakdown(breakdown: &TipBreakdown) {
    println!();
    println!(
        "{} {}",
        "Tip:".bold(),
        breakdown.formatted.bright_green().bold()
    );
    if breakdown.rounded {
        println!(
            "{}",
            format!("(rounded up from {})", breakdown.raw_tip.normalize()).dimmed()
        );
    }
}
