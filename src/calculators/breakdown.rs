//! Result structures and periodic snapshots produced by the calculators

use serde::{Deserialize, Serialize};

use super::round_amount;

/// How the compound interest calculator grew the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundingMode {
    /// Lump sum only, compounded once per year
    Annual,
    /// Recurring deposits, compounded monthly
    Monthly,
}

impl CompoundingMode {
    /// Any recurring contribution switches to monthly granularity
    pub fn for_contribution(monthly_contribution: f64) -> Self {
        if monthly_contribution == 0.0 {
            CompoundingMode::Annual
        } else {
            CompoundingMode::Monthly
        }
    }
}

/// Snapshot at the end of a year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearData {
    /// 1-indexed year
    pub year: u32,
    pub balance: f64,
    pub contributions: f64,
    pub interest: f64,
}

impl YearData {
    /// Interest is derived from the rounded fields so the row always adds up
    pub(crate) fn snapshot(year: u32, balance: f64, contributions: f64) -> Self {
        let balance = round_amount(balance);
        let contributions = round_amount(contributions);
        Self {
            year,
            balance,
            contributions,
            interest: balance - contributions,
        }
    }
}

/// Snapshot emitted at year boundaries and at the final month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthData {
    /// Cumulative month count (1-indexed)
    pub month: u64,
    pub balance: f64,
    /// Total deposited so far, never rounded
    pub invested: f64,
    pub returns: f64,
}

impl MonthData {
    pub(crate) fn snapshot(month: u64, balance: f64, invested: f64) -> Self {
        let balance = round_amount(balance);
        Self {
            month,
            balance,
            invested,
            returns: balance - invested,
        }
    }
}

/// Lump sum plus optional recurring contribution growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub final_amount: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    pub compounding: CompoundingMode,
    pub yearly_breakdown: Vec<YearData>,
}

impl CompoundInterestResult {
    /// Number of years covered by the breakdown
    pub fn years(&self) -> usize {
        self.yearly_breakdown.len()
    }
}

/// Outcome of a systematic investment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub final_amount: f64,
    pub total_invested: f64,
    pub total_returns: f64,
    pub monthly_breakdown: Vec<MonthData>,
}

impl SipResult {
    /// Months elapsed at the last snapshot (0 for an empty horizon)
    pub fn elapsed_months(&self) -> u64 {
        self.monthly_breakdown.last().map(|m| m.month).unwrap_or(0)
    }
}
