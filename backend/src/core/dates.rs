//! Export-date helpers
//!
//! A shipment stamps its registration date from the system clock at
//! construction. Constructors also accept an explicit date (`*_on` variants)
//! so tests stay deterministic.

use chrono::{Local, NaiveDate};

/// Current date from the system clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a date as `dd/mm/yyyy`, the layout used by registry reports.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use export_registry_core::format_dd_mm_yyyy;
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
/// assert_eq!(format_dd_mm_yyyy(date), "07/08/2026");
/// ```
pub fn format_dd_mm_yyyy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_dd_mm_yyyy(date), "04/03/2025");
    }

    #[test]
    fn formats_two_digit_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_dd_mm_yyyy(date), "31/12/2025");
    }
}
