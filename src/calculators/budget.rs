//! Fixed-ratio budget split (50/30/20 by default)

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result};
use super::round_amount;

/// Split of a monthly income into three rounded buckets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl BudgetAllocation {
    /// Sum of the buckets; differs from the income by at most rounding error
    pub fn total(&self) -> f64 {
        self.needs + self.wants + self.savings
    }
}

/// Fractions of income assigned to each bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetRule {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl Default for BudgetRule {
    fn default() -> Self {
        Self {
            needs: 0.5,
            wants: 0.3,
            savings: 0.2,
        }
    }
}

impl BudgetRule {
    const SUM_TOLERANCE: f64 = 1e-9;

    /// Check the fractions are non-negative and add up to one
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, fraction) in [("needs", self.needs), ("wants", self.wants), ("savings", self.savings)] {
            if !fraction.is_finite() || fraction < 0.0 {
                return Err(format!("budget fraction `{}` must be non-negative, got {}", name, fraction));
            }
        }

        let sum = self.needs + self.wants + self.savings;
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(format!("budget fractions must sum to 1, got {}", sum));
        }

        Ok(())
    }

    /// Split `monthly_income` according to this rule
    ///
    /// # Errors
    /// `CalcError::InvalidArgument` if the income is negative or not finite.
    pub fn allocate(&self, monthly_income: f64) -> Result<BudgetAllocation> {
        let income = ensure_non_negative("monthly_income", monthly_income)?;
        debug!("budget: income={} rule={:?}", income, self);

        Ok(BudgetAllocation {
            needs: round_amount(income * self.needs),
            wants: round_amount(income * self.wants),
            savings: round_amount(income * self.savings),
        })
    }
}

/// Split income 50% needs, 30% wants, 20% savings
pub fn compute_budget_allocation(monthly_income: f64) -> Result<BudgetAllocation> {
    BudgetRule::default().allocate(monthly_income)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifty_thirty_twenty() {
        let result = compute_budget_allocation(20_000_000.0).unwrap();

        assert_eq!(result.needs, 10_000_000.0);
        assert_eq!(result.wants, 6_000_000.0);
        assert_eq!(result.savings, 4_000_000.0);
    }

    #[test]
    fn test_zero_income() {
        let result = compute_budget_allocation(0.0).unwrap();
        assert_eq!(result, BudgetAllocation { needs: 0.0, wants: 0.0, savings: 0.0 });
    }

    #[test]
    fn test_rounds_to_whole_units() {
        let result = compute_budget_allocation(10_000_001.0).unwrap();

        assert_eq!(result.needs.fract(), 0.0);
        assert_eq!(result.wants.fract(), 0.0);
        assert_eq!(result.savings.fract(), 0.0);
        assert!((result.total() - 10_000_001.0).abs() <= 1.5);
    }

    #[test]
    fn test_realistic_salary() {
        let result = compute_budget_allocation(15_000_000.0).unwrap();

        assert_eq!(result.needs, 7_500_000.0);
        assert_eq!(result.wants, 4_500_000.0);
        assert_eq!(result.savings, 3_000_000.0);
        assert_eq!(result.total(), 15_000_000.0);
    }

    #[test]
    fn test_negative_income_rejected() {
        assert!(compute_budget_allocation(-20_000_000.0).is_err());
    }

    #[test]
    fn test_custom_rule() {
        let rule = BudgetRule { needs: 0.6, wants: 0.2, savings: 0.2 };
        assert!(rule.validate().is_ok());

        let result = rule.allocate(10_000_000.0).unwrap();
        assert_eq!(result.needs, 6_000_000.0);
        assert_eq!(result.wants, 2_000_000.0);
        assert_eq!(result.savings, 2_000_000.0);
    }

    #[test]
    fn test_rule_validation() {
        assert!(BudgetRule::default().validate().is_ok());
        assert!(BudgetRule { needs: 0.5, wants: 0.3, savings: 0.3 }.validate().is_err());
        assert!(BudgetRule { needs: 1.2, wants: -0.2, savings: 0.0 }.validate().is_err());
    }
}
