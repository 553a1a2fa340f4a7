//! Calendar date validation with Gregorian leap-year rules.

use serde_json::Value;

/// Days per month in a common (non-leap) year
const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year.
///
/// A year divisible by 4 is a leap year, except centuries, which must also
/// be divisible by 400.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` (1-based) of `year`.
///
/// Returns `None` if `month` is outside `1..=12`.
pub fn days_in_month(month: i64, year: i64) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }

    let mut table = DAYS_PER_MONTH;
    if is_leap_year(year) {
        table[1] = 29;
    }
    Some(table[(month - 1) as usize])
}

/// Checks whether `day`/`month`/`year` names a real calendar date.
///
/// Never fails: anything out of range is simply `false`.
///
/// # Example
///
/// ```rust
/// use utilkit_core::is_valid_date;
///
/// assert!(is_valid_date(29, 2, 2024));
/// assert!(!is_valid_date(29, 2, 2023));
/// ```
pub fn is_valid_date(day: i64, month: i64, year: i64) -> bool {
    if day < 1 || year < 1 {
        return false;
    }

    match days_in_month(month, year) {
        Some(days) => day <= i64::from(days),
        None => false,
    }
}

/// Loosely-typed variant of [`is_valid_date`] for values of unknown shape.
///
/// Each part must be an integral JSON number; strings, booleans, nulls and
/// fractional numbers all yield `false`.
pub fn is_valid_date_value(day: &Value, month: &Value, year: &Value) -> bool {
    match (as_integer(day), as_integer(month), as_integer(year)) {
        (Some(d), Some(m), Some(y)) => is_valid_date(d, m, y),
        _ => false,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    // Integral but past i64::MAX
    if value.as_u64().is_some() {
        return Some(i64::MAX);
    }

    // 29.0 is still an integer; `as` saturates out-of-range values
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 {
        Some(f as i64)
    } else {
        None
    }
}
