//! Scenario runner for single and batch calculator requests
//!
//! Holds one `EngineConfig` and dispatches tagged requests to the
//! calculators. Batches run in parallel; each request succeeds or fails on
//! its own.

pub mod loader;

pub use loader::{load_scenarios, load_scenarios_from_reader, ScenarioLoadError};

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calculators::{
    compare_investment_vs_savings, compute_compound_interest, compute_sip, compute_sip_months,
    BudgetAllocation, CompoundInterestResult, InvestmentComparison, SipResult,
};
use crate::config::EngineConfig;
use crate::error::CalcError;

/// A calculator invocation, tagged by `"calculator"` in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculatorRequest {
    Compound {
        principal: f64,
        annual_rate_percent: f64,
        years: i32,
        #[serde(default)]
        monthly_contribution: f64,
    },
    Sip {
        monthly_amount: f64,
        annual_rate_percent: f64,
        years: i32,
    },
    /// SIP with the horizon in months
    SipMonths {
        monthly_amount: f64,
        annual_rate_percent: f64,
        months: i32,
    },
    Budget {
        monthly_income: f64,
    },
    Compare {
        initial_amount: f64,
        investment_rate_percent: f64,
        savings_rate_percent: f64,
        years: i32,
    },
}

impl CalculatorRequest {
    pub fn name(&self) -> &'static str {
        match self {
            CalculatorRequest::Compound { .. } => "compound",
            CalculatorRequest::Sip { .. } => "sip",
            CalculatorRequest::SipMonths { .. } => "sip_months",
            CalculatorRequest::Budget { .. } => "budget",
            CalculatorRequest::Compare { .. } => "compare",
        }
    }

    /// Run the calculator; budget requests use the configured rule
    pub fn run(&self, config: &EngineConfig) -> Result<CalculatorOutcome, CalcError> {
        let outcome = match *self {
            CalculatorRequest::Compound {
                principal,
                annual_rate_percent,
                years,
                monthly_contribution,
            } => CalculatorOutcome::Compound(compute_compound_interest(
                principal,
                annual_rate_percent,
                years,
                monthly_contribution,
            )?),
            CalculatorRequest::Sip {
                monthly_amount,
                annual_rate_percent,
                years,
            } => CalculatorOutcome::Sip(compute_sip(monthly_amount, annual_rate_percent, years)?),
            CalculatorRequest::SipMonths {
                monthly_amount,
                annual_rate_percent,
                months,
            } => CalculatorOutcome::Sip(compute_sip_months(monthly_amount, annual_rate_percent, months)?),
            CalculatorRequest::Budget { monthly_income } => {
                CalculatorOutcome::Budget(config.budget.allocate(monthly_income)?)
            }
            CalculatorRequest::Compare {
                initial_amount,
                investment_rate_percent,
                savings_rate_percent,
                years,
            } => CalculatorOutcome::Compare(compare_investment_vs_savings(
                initial_amount,
                investment_rate_percent,
                savings_rate_percent,
                years,
            )?),
        };
        Ok(outcome)
    }
}

/// Result of a calculator invocation, tagged like the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculatorOutcome {
    Compound(CompoundInterestResult),
    Sip(SipResult),
    Budget(BudgetAllocation),
    Compare(InvestmentComparison),
}

/// Headline totals rendered for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedTotal {
    pub label: &'static str,
    pub value: String,
}

impl CalculatorOutcome {
    /// Currency strings for the headline figures of this outcome
    pub fn formatted_totals(&self, config: &EngineConfig) -> Vec<FormattedTotal> {
        let fmt = |label: &'static str, amount: f64| FormattedTotal {
            label,
            value: config.locale.format_currency(amount),
        };
        match self {
            CalculatorOutcome::Compound(r) => vec![
                fmt("final_amount", r.final_amount),
                fmt("total_contributions", r.total_contributions),
                fmt("total_interest", r.total_interest),
            ],
            CalculatorOutcome::Sip(r) => vec![
                fmt("final_amount", r.final_amount),
                fmt("total_invested", r.total_invested),
                fmt("total_returns", r.total_returns),
            ],
            CalculatorOutcome::Budget(r) => vec![
                fmt("needs", r.needs),
                fmt("wants", r.wants),
                fmt("savings", r.savings),
            ],
            CalculatorOutcome::Compare(r) => vec![
                fmt("investment_final_amount", r.investment_final_amount),
                fmt("savings_final_amount", r.savings_final_amount),
                fmt("difference", r.difference),
            ],
        }
    }
}

/// A request with an identifier, as read from a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario_id: u32,
    pub request: CalculatorRequest,
}

/// Outcome of one scenario in a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario_id: u32,
    pub calculator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CalculatorOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScenarioReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Pre-configured runner for calculator requests
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: EngineConfig,
}

impl ScenarioRunner {
    /// Runner with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Run a single request
    pub fn run(&self, request: &CalculatorRequest) -> Result<CalculatorOutcome, CalcError> {
        request.run(&self.config)
    }

    /// Run many scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioReport> {
        info!("running {} scenarios", scenarios.len());

        let reports: Vec<ScenarioReport> = scenarios
            .par_iter()
            .map(|scenario| {
                let calculator = scenario.request.name().to_string();
                match self.run(&scenario.request) {
                    Ok(outcome) => ScenarioReport {
                        scenario_id: scenario.scenario_id,
                        calculator,
                        outcome: Some(outcome),
                        error: None,
                    },
                    Err(err) => {
                        warn!("scenario {} failed: {}", scenario.scenario_id, err);
                        ScenarioReport {
                            scenario_id: scenario.scenario_id,
                            calculator,
                            outcome: None,
                            error: Some(err.to_string()),
                        }
                    }
                }
            })
            .collect();

        let failed = reports.iter().filter(|r| !r.is_ok()).count();
        info!("batch complete: {} succeeded, {} failed", reports.len() - failed, failed);
        reports
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::BudgetRule;

    fn compound(principal: f64) -> CalculatorRequest {
        CalculatorRequest::Compound {
            principal,
            annual_rate_percent: 10.0,
            years: 5,
            monthly_contribution: 0.0,
        }
    }

    #[test]
    fn test_request_json_tagging() {
        let json = r#"{"calculator":"compound","principal":10000000,"annual_rate_percent":10,"years":5}"#;
        let request: CalculatorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, compound(10_000_000.0));

        let sip: CalculatorRequest = serde_json::from_str(
            r#"{"calculator":"sip","monthly_amount":1000000,"annual_rate_percent":12,"years":10}"#,
        )
        .unwrap();
        assert_eq!(sip.name(), "sip");

        let partial: CalculatorRequest = serde_json::from_str(
            r#"{"calculator":"sip_months","monthly_amount":500000,"annual_rate_percent":8,"months":30}"#,
        )
        .unwrap();
        match ScenarioRunner::new().run(&partial).unwrap() {
            CalculatorOutcome::Sip(r) => assert_eq!(r.elapsed_months(), 30),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_outcome_json_carries_tag() {
        let outcome = ScenarioRunner::new()
            .run(&CalculatorRequest::Budget { monthly_income: 20_000_000.0 })
            .unwrap();
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["calculator"], "budget");
        assert_eq!(value["needs"], 10_000_000.0);
    }

    #[test]
    fn test_budget_uses_configured_rule() {
        let mut runner = ScenarioRunner::new();
        runner.config_mut().budget = BudgetRule { needs: 0.7, wants: 0.1, savings: 0.2 };

        let outcome = runner
            .run(&CalculatorRequest::Budget { monthly_income: 10_000_000.0 })
            .unwrap();
        match outcome {
            CalculatorOutcome::Budget(b) => {
                assert_eq!(b.needs, 7_000_000.0);
                assert_eq!(b.wants, 1_000_000.0);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let runner = ScenarioRunner::new();
        let scenarios: Vec<Scenario> = (1..=20)
            .map(|id| Scenario {
                scenario_id: id,
                request: if id == 7 { compound(-1.0) } else { compound(f64::from(id) * 1_000.0) },
            })
            .collect();

        let reports = runner.run_batch(&scenarios);

        assert_eq!(reports.len(), 20);
        for (index, report) in reports.iter().enumerate() {
            assert_eq!(report.scenario_id as usize, index + 1);
        }
        assert!(!reports[6].is_ok());
        assert!(reports[6].error.as_ref().unwrap().contains("principal"));
        assert_eq!(reports.iter().filter(|r| r.is_ok()).count(), 19);
    }

    #[test]
    fn test_formatted_totals() {
        let runner = ScenarioRunner::new();
        let outcome = runner.run(&compound(10_000_000.0)).unwrap();
        let totals = outcome.formatted_totals(runner.config());

        assert_eq!(totals[0].label, "final_amount");
        assert_eq!(totals[0].value, "16.105.100\u{a0}₫");
        assert_eq!(totals[2].value, "6.105.100\u{a0}₫");
    }
}
