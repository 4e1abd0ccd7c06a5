//! Age computation from a raw birth date string.

use chrono::{Datelike, Local, NaiveDate};

/// Parses a `YYYY-MM-DD` birth date and computes the age in whole years
/// as of the system's current date.
///
/// Returns `None` for any string that is not a valid calendar date in that
/// format. Parse failures never surface as errors to the caller.
pub fn compute_age(raw: &str) -> Option<(NaiveDate, i32)> {
    compute_age_at(raw, Local::now().date_naive())
}

/// Same as [`compute_age`] but with an explicit reference date, so the
/// clock can be fixed in tests.
pub fn compute_age_at(raw: &str, today: NaiveDate) -> Option<(NaiveDate, i32)> {
    let birth = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;

    // One year less while this year's birthday has not been reached.
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Some((birth, years))
}
