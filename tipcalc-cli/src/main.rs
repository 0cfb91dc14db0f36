//! # tipcalc - Terminal Tip Calculator
//!
//! Computes a tip from a bill amount and a percentage, optionally rounded up
//! to the next whole currency unit, formatted for the chosen locale.
//!
//! ## Usage
//! ```bash
//! # Interactive screen
//! tipcalc
//!
//! # One-shot calculation
//! tipcalc calc --amount 33 --percent 15 --round-up
//!
//! # Guided prompts
//! tipcalc wizard --locale fr-FR
//! ```

use clap::{Parser, Subcommand};
use tabled::{Table, Tabled, settings::Style};
use tipcalc::prelude::*;
use tracing::{info, warn};

mod config_loader;
mod tui;
mod wizard;

use config_loader::CliConfig;
use tui::{App, handle_events, ui};

/// Terminal tip calculator
#[derive(Parser, Debug)]
#[command(name = "tipcalc")]
#[command(version)]
#[command(about = "Tip calculator with round-up and locale-aware currency formatting", long_about = None)]
struct Args {
    /// Locale for currency formatting (en-US, en-GB, fr-FR, ja-JP)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Start the interactive screen in dark mode
    #[arg(long, default_value = "false")]
    dark: bool,

    /// Enable file logging to logs/ directory
    #[arg(long, default_value = "false", global = true)]
    log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate a single tip and print it
    Calc {
        /// Bill amount; unparseable text counts as 0
        #[arg(long, short, default_value = "", allow_hyphen_values = true)]
        amount: String,

        /// Tip percentage; unparseable text counts as 0
        #[arg(long, short, default_value = "", allow_hyphen_values = true)]
        percent: String,

        /// Round the tip up to the next whole unit
        #[arg(long, short, default_value = "false")]
        round_up: bool,

        /// Print the full breakdown as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Print the calculation steps
        #[arg(long, default_value = "false")]
        explain: bool,
    },
    /// Answer a few prompts to calculate a tip
    Wizard,
}

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "Step")]
    step: String,
    #[tabled(rename = "Op")]
    operation: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (cli_config, config_problem) = CliConfig::load_or_default();

    let is_tui_mode = args.command.is_none();
    let log_to_file = args.log || cli_config.enable_logging.unwrap_or(false);
    let _file_guard = init_tracing(log_to_file, is_tui_mode)?;
    if let Some(problem) = config_problem {
        warn!("{}, using defaults", problem);
    }

    let config = resolve_config(&args, &cli_config)?;
    info!(locale = %config.locale, default_percent = %config.default_tip_percent, "configuration resolved");
    let calculator = TipCalculator::new(&config)?;

    match args.command {
        Some(Commands::Calc {
            amount,
            percent,
            round_up,
            json,
            explain,
        }) => run_calc(&calculator, &amount, &percent, round_up, json, explain),
        Some(Commands::Wizard) => {
            wizard::run_wizard_mode(&calculator, config.default_tip_percent)?;
            Ok(())
        }
        None => {
            let dark = args.dark || cli_config.dark_mode.unwrap_or(false);
            run_tui(App::new(calculator, config.default_tip_percent, dark))
        }
    }
}

/// Sets up tracing. In TUI mode nothing is written to the console.
fn init_tracing(
    log_to_file: bool,
    is_tui_mode: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = EnvFilter::from_default_env().add_directive("tipcalc=info".parse()?);

    if log_to_file {
        std::fs::create_dir_all("logs")?;
        let file_appender = tracing_appender::rolling::daily("logs", "tipcalc.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        if is_tui_mode {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
        } else {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .with(file_layer)
                .init();
        }

        info!("--- Tip Calculator Session Started [{}] ---", chrono::Utc::now());
        return Ok(Some(guard));
    }

    if !is_tui_mode {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(None)
}

/// Environment, then config file, then command-line flags.
fn resolve_config(args: &Args, cli_config: &CliConfig) -> Result<TipConfig, TipError> {
    let base = TipConfig::from_env().unwrap_or_else(|e| {
        warn!("Ignoring environment configuration: {}", e);
        TipConfig::default()
    });
    let mut config = cli_config.apply(base);
    if let Some(tag) = &args.locale {
        config = config.with_locale(tag.parse()?);
    }
    Ok(config)
}

fn run_calc(
    calculator: &TipCalculator,
    amount: &str,
    percent: &str,
    round_up: bool,
    json: bool,
    explain: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let breakdown = calculator.calculate_text(amount, percent, round_up);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    if explain {
        let rows: Vec<StepRow> = breakdown
            .trace
            .iter()
            .map(|step| StepRow {
                step: step.description.clone(),
                operation: step.operation.to_string(),
                value: step.amount.map(|a| a.normalize().to_string()).unwrap_or_default(),
            })
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
    }

    println!("{}", breakdown.formatted);
    Ok(())
}

/// Run the TUI application
fn run_tui(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &mut app);
    ratatui::restore();
    result
}

/// Main application loop
fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui(frame, app))?;

        if handle_events(app)? {
            break;
        }
    }
    Ok(())
}
