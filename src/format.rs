//! Currency Display
//!
//! Whole-dollar formatting for the salary slider readout.

use num_format::{Locale, ToFormattedString};

/// Format a whole-dollar amount as `$1,234,567`.
pub fn usd(amount: u64) -> String {
    format!("${}", amount.to_formatted_string(&Locale::en))
}

/// Label shown next to the salary range slider.
pub fn salary_range_label(value: u64, max: u64) -> String {
    format!("Salary: {} - {}", usd(value), usd(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd() {
        assert_eq!(usd(0), "$0");
        assert_eq!(usd(999), "$999");
        assert_eq!(usd(1000), "$1,000");
        assert_eq!(usd(500_000), "$500,000");
    }

    #[test]
    fn test_salary_range_label() {
        assert_eq!(
            salary_range_label(500_000, 2_000_000),
            "Salary: $500,000 - $2,000,000"
        );
    }
}
