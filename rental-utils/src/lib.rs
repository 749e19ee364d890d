//! Shared utility functions for rental dashboard crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    /// Plain calendar date formats accepted for `rental_date`.
    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

    /// Date-time formats accepted for `rental_date`; only the date part is kept.
    const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S%.f"];

    /// Parse a rental date cell.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM-DD HH:MM[:SS]`,
    /// `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 timestamps. The calendar
    /// date is taken as written, without shifting between time zones.
    pub fn parse_rental_date(s: &str) -> Result<NaiveDate, DateError> {
        let s = s.trim();
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Ok(date);
            }
        }
        for format in DATE_TIME_FORMATS {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(date_time.date());
            }
        }
        if let Ok(date_time) = DateTime::parse_from_rfc3339(s) {
            return Ok(date_time.date_naive());
        }
        Err(DateError(format!("unrecognized date '{}'", s)))
    }

    /// Parse a "YYYY-MM" key into `(year, month)`.
    ///
    /// The month must be two digits and within 1..=12, so "2024-7" is rejected.
    pub fn parse_year_month(s: &str) -> Result<(i32, u32), DateError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| DateError(format!("expected YYYY-MM, got '{}'", s)))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(DateError(format!("expected YYYY-MM, got '{}'", s)));
        }
        let year: i32 = year
            .parse()
            .map_err(|_| DateError(format!("invalid year in '{}'", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| DateError(format!("invalid month in '{}'", s)))?;
        if !(1..=12).contains(&month) {
            return Err(DateError(format!("month out of range in '{}'", s)));
        }
        Ok((year, month))
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
