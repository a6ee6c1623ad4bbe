//! Compound interest with an optional recurring monthly contribution

use log::debug;

use crate::error::{ensure_non_negative, ensure_non_negative_count, Result};
use super::breakdown::{CompoundInterestResult, CompoundingMode, YearData};
use super::{round_amount, MONTHS_PER_YEAR};

/// Grow `principal` for `years` years at `annual_rate_percent` (10.0 = 10%).
///
/// With no monthly contribution the balance compounds once a year. Any
/// non-zero contribution switches to monthly compounding with the deposit
/// added after each month's interest. Contributions are accumulated
/// unrounded; balance and contributions are reported rounded to whole units
/// and interest is their difference.
///
/// # Errors
/// `CalcError::InvalidArgument` if any argument is negative or not finite.
pub fn compute_compound_interest(
    principal: f64,
    annual_rate_percent: f64,
    years: i32,
    monthly_contribution: f64,
) -> Result<CompoundInterestResult> {
    let principal = ensure_non_negative("principal", principal)?;
    let rate = ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
    let years = ensure_non_negative_count("years", years)?;
    let contribution = ensure_non_negative("monthly_contribution", monthly_contribution)?;

    let compounding = CompoundingMode::for_contribution(contribution);
    debug!(
        "compound interest: principal={} rate={}% years={} contribution={} mode={:?}",
        principal, rate, years, contribution, compounding
    );

    let mut balance = principal;
    let mut total_contributions = principal;
    let mut yearly_breakdown = Vec::new();

    match compounding {
        CompoundingMode::Annual => {
            let annual_rate = rate / 100.0;
            for year in 1..=years {
                balance *= 1.0 + annual_rate;
                yearly_breakdown.push(YearData::snapshot(year, balance, total_contributions));
            }
        }
        CompoundingMode::Monthly => {
            let monthly_rate = rate / 100.0 / MONTHS_PER_YEAR as f64;
            for year in 1..=years {
                for _ in 0..MONTHS_PER_YEAR {
                    balance = balance * (1.0 + monthly_rate) + contribution;
                    total_contributions += contribution;
                }
                yearly_breakdown.push(YearData::snapshot(year, balance, total_contributions));
            }
        }
    }

    let final_amount = round_amount(balance);
    let total_contributions = round_amount(total_contributions);

    Ok(CompoundInterestResult {
        final_amount,
        total_contributions,
        total_interest: final_amount - total_contributions,
        compounding,
        yearly_breakdown,
    })
}
