//! AWS Lambda handler for calculator requests
//!
//! Accepts a `CalculatorRequest` as the JSON payload and returns the full
//! outcome together with display-formatted headline totals. Validation
//! failures come back in the `error` field instead of failing the invocation.

use finance_calculators::{
    config::EngineConfig,
    scenario::FormattedTotal,
    CalculatorOutcome, CalculatorRequest, ScenarioRunner,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::Serialize;
use std::time::Instant;

/// Output from a calculator invocation
#[derive(Debug, Serialize)]
pub struct CalculatorResponse {
    pub calculator: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CalculatorOutcome>,
    pub formatted: Vec<FormattedTotal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub execution_time_ms: u64,
}

fn respond(runner: &ScenarioRunner, request: &CalculatorRequest) -> CalculatorResponse {
    let start = Instant::now();
    let calculator = request.name();

    match runner.run(request) {
        Ok(outcome) => CalculatorResponse {
            calculator,
            formatted: outcome.formatted_totals(runner.config()),
            outcome: Some(outcome),
            error: None,
            execution_time_ms: start.elapsed().as_millis() as u64,
        },
        Err(err) => {
            warn!("{} request rejected: {}", calculator, err);
            CalculatorResponse {
                calculator,
                outcome: None,
                formatted: Vec::new(),
                error: Some(err.to_string()),
                execution_time_ms: start.elapsed().as_millis() as u64,
            }
        }
    }
}

async fn handler(
    runner: &ScenarioRunner,
    event: LambdaEvent<CalculatorRequest>,
) -> Result<CalculatorResponse, Error> {
    let (request, context) = event.into_parts();
    info!("request {}: {}", context.request_id, request.name());

    Ok(respond(runner, &request))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // Configuration is read once per cold start
    let runner = ScenarioRunner::with_config(EngineConfig::from_env()?);
    let runner = &runner;

    run(service_fn(move |event| async move { handler(runner, event).await })).await
}
