// Date utility functions
// Month arithmetic shared by the grid and the selection model

use chrono::{Datelike, Months, NaiveDate};

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date)).unwrap_or(date)
}

/// Get the number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        // Only December of the last representable year has no successor month.
        .unwrap_or(31)
}

/// Shift a date by the given number of months, clamping the day to the
/// length of the target month. `None` when the result is not representable.
pub fn shift_months(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Months since year 0, so two dates can be ordered by month alone.
pub fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// First day of the month with the given [`month_index`].
pub fn from_month_index(index: i64) -> Option<NaiveDate> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(2024, 2, 29; "leap february")]
    #[test_case(2025, 2, 28; "common february")]
    #[test_case(2025, 4, 30; "april")]
    #[test_case(2025, 12, 31; "december")]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(ymd(year, month, 10)), expected);
    }

    #[test]
    fn test_first_and_last_of_month() {
        assert_eq!(first_of_month(ymd(2024, 6, 17)), ymd(2024, 6, 1));
        assert_eq!(last_of_month(ymd(2024, 6, 17)), ymd(2024, 6, 30));
        assert_eq!(last_of_month(ymd(2024, 2, 1)), ymd(2024, 2, 29));
    }

    #[test]
    fn test_shift_months_clamps_day() {
        assert_eq!(shift_months(ymd(2025, 1, 31), 1), Some(ymd(2025, 2, 28)));
        assert_eq!(shift_months(ymd(2025, 3, 15), -3), Some(ymd(2024, 12, 15)));
        assert_eq!(shift_months(ymd(2025, 3, 15), 0), Some(ymd(2025, 3, 15)));
    }

    #[test]
    fn test_month_index_roundtrip_across_year_boundary() {
        let december = ymd(2024, 12, 9);
        let index = month_index(december);
        assert_eq!(from_month_index(index), Some(ymd(2024, 12, 1)));
        assert_eq!(from_month_index(index + 1), Some(ymd(2025, 1, 1)));
        assert_eq!(from_month_index(index - 12), Some(ymd(2023, 12, 1)));
    }
}
