//! Side-by-side growth of the same principal in an investment and a savings account

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_non_negative_count, CalcError, Result};
use super::round_amount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentComparison {
    pub investment_final_amount: f64,
    pub savings_final_amount: f64,
    /// Investment minus savings; negative when savings wins
    pub difference: f64,
    pub investment_returns: f64,
    pub savings_interest: f64,
}

/// Closed-form annual compounding, rounded to whole units
fn grow(amount: f64, rate_parameter: &'static str, rate_percent: f64, years: u32) -> Result<f64> {
    if amount == 0.0 {
        return Ok(0.0);
    }
    let grown = round_amount(amount * (1.0 + rate_percent / 100.0).powf(f64::from(years)));
    if grown.is_finite() {
        Ok(grown)
    } else {
        Err(CalcError::InvalidArgument {
            parameter: rate_parameter,
            value: rate_percent,
        })
    }
}

/// Compare `initial_amount` compounded annually at two rates.
///
/// # Errors
/// `CalcError::InvalidArgument` if any argument is negative or not finite,
/// or if a rate grows the principal past the `f64` range.
pub fn compare_investment_vs_savings(
    initial_amount: f64,
    investment_rate_percent: f64,
    savings_rate_percent: f64,
    years: i32,
) -> Result<InvestmentComparison> {
    let initial = ensure_non_negative("initial_amount", initial_amount)?;
    let investment_rate = ensure_non_negative("investment_rate_percent", investment_rate_percent)?;
    let savings_rate = ensure_non_negative("savings_rate_percent", savings_rate_percent)?;
    let years = ensure_non_negative_count("years", years)?;

    debug!(
        "comparison: initial={} investment={}% savings={}% years={}",
        initial, investment_rate, savings_rate, years
    );

    let investment_final_amount = grow(initial, "investment_rate_percent", investment_rate, years)?;
    let savings_final_amount = grow(initial, "savings_rate_percent", savings_rate, years)?;

    Ok(InvestmentComparison {
        investment_final_amount,
        savings_final_amount,
        difference: investment_final_amount - savings_final_amount,
        investment_returns: investment_final_amount - initial,
        savings_interest: savings_final_amount - initial,
    })
}
