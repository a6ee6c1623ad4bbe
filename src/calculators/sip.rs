//! Systematic investment plan: fixed monthly deposits compounding monthly

use log::debug;

use crate::error::{ensure_non_negative, ensure_non_negative_count, Result};
use super::breakdown::{MonthData, SipResult};
use super::{round_amount, MONTHS_PER_YEAR};

/// Project `monthly_amount` deposited every month for `years` years.
///
/// # Errors
/// `CalcError::InvalidArgument` if any argument is negative or not finite.
pub fn compute_sip(monthly_amount: f64, annual_rate_percent: f64, years: i32) -> Result<SipResult> {
    let amount = ensure_non_negative("monthly_amount", monthly_amount)?;
    let rate = ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
    let years = ensure_non_negative_count("years", years)?;

    Ok(project(amount, rate, u64::from(years) * u64::from(MONTHS_PER_YEAR)))
}

/// Same as [`compute_sip`] with the horizon given in months, so the final
/// year may be partial. A snapshot is emitted every 12 months and at the
/// final month.
///
/// # Errors
/// `CalcError::InvalidArgument` if any argument is negative or not finite.
pub fn compute_sip_months(monthly_amount: f64, annual_rate_percent: f64, months: i32) -> Result<SipResult> {
    let amount = ensure_non_negative("monthly_amount", monthly_amount)?;
    let rate = ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
    let months = ensure_non_negative_count("months", months)?;

    Ok(project(amount, rate, u64::from(months)))
}

fn project(amount: f64, rate: f64, months: u64) -> SipResult {
    debug!("sip: amount={} rate={}% months={}", amount, rate, months);

    let monthly_rate = rate / 100.0 / MONTHS_PER_YEAR as f64;
    let mut balance = 0.0;
    let mut monthly_breakdown = Vec::new();

    for month in 1..=months {
        balance = balance * (1.0 + monthly_rate) + amount;

        if month % u64::from(MONTHS_PER_YEAR) == 0 || month == months {
            monthly_breakdown.push(MonthData::snapshot(month, balance, invested_after(amount, month)));
        }
    }

    let final_amount = round_amount(balance);
    let total_invested = invested_after(amount, months);

    SipResult {
        final_amount,
        total_invested,
        total_returns: final_amount - total_invested,
        monthly_breakdown,
    }
}

/// Deposits so far as a single product, free of repeated-addition drift
fn invested_after(amount: f64, months: u64) -> f64 {
    amount * months as f64
}
