//! Finance Calculators CLI
//!
//! Runs one calculator from the command line and prints the breakdown

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use finance_calculators::{
    calculators::write_breakdown_csv,
    config::EngineConfig,
    CalculatorOutcome, CalculatorRequest, ScenarioRunner,
};
use log::warn;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "finance_calculators", version, about = "Personal finance calculators")]
struct Cli {
    /// JSON configuration file (falls back to $FINCALC_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the yearly/monthly breakdown to this CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Print the full result as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lump sum growth with an optional monthly contribution
    Compound {
        #[arg(long, allow_negative_numbers = true)]
        principal: f64,
        /// Annual rate in percent (10 = 10%)
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        years: i32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        monthly_contribution: f64,
    },
    /// Fixed monthly investment compounding monthly
    Sip {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true, required_unless_present = "months")]
        years: Option<i32>,
        /// Horizon in months instead of years
        #[arg(long, allow_negative_numbers = true, conflicts_with = "years")]
        months: Option<i32>,
    },
    /// Split a monthly income into needs, wants and savings
    Budget {
        #[arg(long, allow_negative_numbers = true)]
        income: f64,
    },
    /// Compare investment and savings growth of the same amount
    Compare {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long, allow_negative_numbers = true)]
        investment_rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        savings_rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        years: i32,
    },
}

impl Command {
    fn to_request(&self) -> CalculatorRequest {
        match *self {
            Command::Compound { principal, rate, years, monthly_contribution } => CalculatorRequest::Compound {
                principal,
                annual_rate_percent: rate,
                years,
                monthly_contribution,
            },
            Command::Sip { amount, rate, months: Some(months), .. } => CalculatorRequest::SipMonths {
                monthly_amount: amount,
                annual_rate_percent: rate,
                months,
            },
            Command::Sip { amount, rate, years, .. } => CalculatorRequest::Sip {
                monthly_amount: amount,
                annual_rate_percent: rate,
                years: years.unwrap_or(0),
            },
            Command::Budget { income } => CalculatorRequest::Budget { monthly_income: income },
            Command::Compare { amount, investment_rate, savings_rate, years } => CalculatorRequest::Compare {
                initial_amount: amount,
                investment_rate_percent: investment_rate,
                savings_rate_percent: savings_rate,
                years,
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_path(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => EngineConfig::from_env()?,
    };
    let runner = ScenarioRunner::with_config(config);

    let request = cli.command.to_request();
    let outcome = runner
        .run(&request)
        .with_context(|| format!("{} calculator rejected its input", request.name()))?;

    if let Some(path) = &cli.csv {
        export_breakdown(path, &outcome)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome, runner.config());
    }

    Ok(())
}

fn export_breakdown(path: &Path, outcome: &CalculatorOutcome) -> Result<()> {
    let file = || File::create(path).with_context(|| format!("creating {}", path.display()));
    match outcome {
        CalculatorOutcome::Compound(r) => write_breakdown_csv(&r.yearly_breakdown, file()?)?,
        CalculatorOutcome::Sip(r) => write_breakdown_csv(&r.monthly_breakdown, file()?)?,
        _ => {
            warn!("this calculator has no breakdown; {} not written", path.display());
            return Ok(());
        }
    }
    println!("Breakdown written to: {}", path.display());
    Ok(())
}

fn print_outcome(outcome: &CalculatorOutcome, config: &EngineConfig) {
    let locale = &config.locale;

    match outcome {
        CalculatorOutcome::Compound(r) => {
            println!("Compound interest ({:?} compounding, {} years):", r.compounding, r.years());
            println!("{:>5} {:>20} {:>20} {:>20}", "Year", "Balance", "Contributions", "Interest");
            println!("{}", "-".repeat(68));
            for row in &r.yearly_breakdown {
                println!(
                    "{:>5} {:>20} {:>20} {:>20}",
                    row.year,
                    locale.format_number(row.balance),
                    locale.format_number(row.contributions),
                    locale.format_number(row.interest),
                );
            }
        }
        CalculatorOutcome::Sip(r) => {
            println!("Systematic investment plan ({} months):", r.elapsed_months());
            println!("{:>6} {:>20} {:>20} {:>20}", "Month", "Balance", "Invested", "Returns");
            println!("{}", "-".repeat(69));
            for row in &r.monthly_breakdown {
                println!(
                    "{:>6} {:>20} {:>20} {:>20}",
                    row.month,
                    locale.format_number(row.balance),
                    locale.format_number(row.invested),
                    locale.format_number(row.returns),
                );
            }
        }
        CalculatorOutcome::Budget(_) => println!("Budget allocation:"),
        CalculatorOutcome::Compare(_) => println!("Investment vs savings:"),
    }

    println!("\nSummary:");
    for total in outcome.formatted_totals(config) {
        println!("  {:<24} {:>24}", total.label, total.value);
    }
}
