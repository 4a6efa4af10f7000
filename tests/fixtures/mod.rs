// Test fixtures - reusable test data
// Provides consistent dates and pickers across all test files
#![allow(dead_code)]

use chrono::NaiveDate;
use month_range_picker::models::settings::PickerSettings;
use month_range_picker::services::picker::DateRangePicker;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// The fixed "today" all pickers are opened on
    pub fn today() -> NaiveDate {
        ymd(2026, 10, 14)
    }

    /// Returns Jan 1, 2024 (start of a leap year)
    pub fn jan_1_2024() -> NaiveDate {
        ymd(2024, 1, 1)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Settings spanning 2024 to 2026 with the month grid
pub fn three_year_settings() -> PickerSettings {
    PickerSettings {
        minimum_date: Some(dates::jan_1_2024()),
        maximum_date: Some(dates::ymd(2026, 1, 1)),
        ..Default::default()
    }
}

pub fn three_year_picker() -> DateRangePicker {
    DateRangePicker::new(&three_year_settings(), dates::today()).unwrap()
}
