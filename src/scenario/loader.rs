//! Load scenarios from CSV
//!
//! Columns: ScenarioID,Calculator,Amount,Rate,SecondaryRate,Years,MonthlyContribution.
//! Empty cells are treated as absent.

use csv::Reader;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use super::{CalculatorRequest, Scenario};

#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario {scenario_id}: unknown calculator `{name}`")]
    UnknownCalculator { scenario_id: u32, name: String },

    #[error("scenario {scenario_id}: missing `{column}` for {calculator}")]
    MissingField {
        scenario_id: u32,
        calculator: &'static str,
        column: &'static str,
    },
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: u32,
    #[serde(rename = "Calculator")]
    calculator: String,
    #[serde(rename = "Amount")]
    amount: Option<f64>,
    #[serde(rename = "Rate")]
    rate: Option<f64>,
    #[serde(rename = "SecondaryRate")]
    secondary_rate: Option<f64>,
    #[serde(rename = "Years")]
    years: Option<i32>,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: Option<f64>,
}

impl CsvRow {
    fn require<T>(&self, value: Option<T>, calculator: &'static str, column: &'static str) -> Result<T, ScenarioLoadError> {
        value.ok_or(ScenarioLoadError::MissingField {
            scenario_id: self.scenario_id,
            calculator,
            column,
        })
    }

    fn to_scenario(&self) -> Result<Scenario, ScenarioLoadError> {
        let request = match self.calculator.trim().to_ascii_lowercase().as_str() {
            "compound" => CalculatorRequest::Compound {
                principal: self.require(self.amount, "compound", "Amount")?,
                annual_rate_percent: self.require(self.rate, "compound", "Rate")?,
                years: self.require(self.years, "compound", "Years")?,
                monthly_contribution: self.monthly_contribution.unwrap_or(0.0),
            },
            "sip" => CalculatorRequest::Sip {
                monthly_amount: self.require(self.amount, "sip", "Amount")?,
                annual_rate_percent: self.require(self.rate, "sip", "Rate")?,
                years: self.require(self.years, "sip", "Years")?,
            },
            "budget" => CalculatorRequest::Budget {
                monthly_income: self.require(self.amount, "budget", "Amount")?,
            },
            "compare" => CalculatorRequest::Compare {
                initial_amount: self.require(self.amount, "compare", "Amount")?,
                investment_rate_percent: self.require(self.rate, "compare", "Rate")?,
                savings_rate_percent: self.require(self.secondary_rate, "compare", "SecondaryRate")?,
                years: self.require(self.years, "compare", "Years")?,
            },
            other => {
                return Err(ScenarioLoadError::UnknownCalculator {
                    scenario_id: self.scenario_id,
                    name: other.to_string(),
                })
            }
        };

        Ok(Scenario {
            scenario_id: self.scenario_id,
            request,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioLoadError> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }
    Ok(scenarios)
}
