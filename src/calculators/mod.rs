//! Pure calculators with period-by-period breakdowns

mod breakdown;
mod budget;
mod comparison;
mod compound;
mod export;
mod sip;

pub use breakdown::{CompoundInterestResult, CompoundingMode, MonthData, SipResult, YearData};
pub use budget::{compute_budget_allocation, BudgetAllocation, BudgetRule};
pub use comparison::{compare_investment_vs_savings, InvestmentComparison};
pub use compound::compute_compound_interest;
pub use export::write_breakdown_csv;
pub use sip::{compute_sip, compute_sip_months};

pub const MONTHS_PER_YEAR: u32 = 12;

/// Round a monetary amount to whole currency units
pub(crate) fn round_amount(amount: f64) -> f64 {
    amount.round()
}
