//! Run every scenario in a CSV file and write the reports as JSON
//!
//! Usage: run_batch [SCENARIOS_CSV] [--output batch_output.json]

use anyhow::{Context, Result};
use clap::Parser;
use finance_calculators::{
    config::EngineConfig,
    format::format_currency_display,
    scenario::{load_scenarios, CalculatorOutcome},
    ScenarioRunner,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Run calculator scenarios from a CSV file")]
struct Args {
    /// Scenario file
    #[arg(default_value = "data/scenarios.csv")]
    scenarios: PathBuf,

    /// Where to write the JSON reports
    #[arg(long, default_value = "batch_output.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios.display());
    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("loading {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_config(EngineConfig::from_env()?);

    let run_start = Instant::now();
    let reports = runner.run_batch(&scenarios);
    println!("Scenarios complete in {:?}", run_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &reports)?;
    println!("Output written to {}", args.output.display());

    println!("\nBatch Summary:");
    for report in &reports {
        let headline = match &report.outcome {
            Some(CalculatorOutcome::Compound(r)) => format_currency_display(r.final_amount),
            Some(CalculatorOutcome::Sip(r)) => format_currency_display(r.final_amount),
            Some(CalculatorOutcome::Budget(r)) => format_currency_display(r.savings),
            Some(CalculatorOutcome::Compare(r)) => format_currency_display(r.difference),
            None => format!("error: {}", report.error.as_deref().unwrap_or("unknown")),
        };
        println!("  {:>4} {:<10} {}", report.scenario_id, report.calculator, headline);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
