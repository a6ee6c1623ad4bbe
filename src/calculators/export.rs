//! CSV export of breakdown rows

use serde::Serialize;
use std::io::Write;

/// Write breakdown rows (yearly or monthly) as CSV with a header row
pub fn write_breakdown_csv<T: Serialize, W: Write>(rows: &[T], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{compute_compound_interest, compute_sip_months};

    #[test]
    fn test_yearly_breakdown_csv() {
        let result = compute_compound_interest(10_000_000.0, 10.0, 2, 0.0).unwrap();
        let mut buffer = Vec::new();
        write_breakdown_csv(&result.yearly_breakdown, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "year,balance,contributions,interest");
        assert_eq!(lines[1], "1,11000000.0,10000000.0,1000000.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_monthly_breakdown_csv() {
        let result = compute_sip_months(1_000.0, 0.0, 18).unwrap();
        let mut buffer = Vec::new();
        write_breakdown_csv(&result.monthly_breakdown, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("month,balance,invested,returns\n"));
        assert!(text.contains("18,18000.0,18000.0,0.0"));
    }
}
