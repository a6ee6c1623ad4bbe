//! Finance Calculators - deterministic personal-finance projections
//!
//! This library provides:
//! - Compound interest with optional monthly contributions
//! - Systematic investment plan (SIP) projections
//! - Fixed-ratio budget allocation (50/30/20 by default)
//! - Investment vs savings account comparison
//! - Locale-aware display formatting
//! - Batch scenario runs and a typed fund listing model

pub mod error;
pub mod calculators;
pub mod format;
pub mod config;
pub mod scenario;
pub mod funds;

// Re-export commonly used types
pub use error::CalcError;
pub use calculators::{
    compute_compound_interest, compute_sip, compute_sip_months, compute_budget_allocation,
    compare_investment_vs_savings, CompoundInterestResult, SipResult, BudgetAllocation,
    InvestmentComparison, YearData, MonthData,
};
pub use format::{format_currency_display, format_grouped_number};
pub use config::EngineConfig;
pub use scenario::{CalculatorRequest, CalculatorOutcome, ScenarioRunner};
