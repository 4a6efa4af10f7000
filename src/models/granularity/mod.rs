//! Comparison granularity and grid layout.
//!
//! A grid cell stands for a whole calendar unit (a month in the default
//! layout), so two dates are compared by the unit they fall in rather than
//! by their exact day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::utils::date::last_of_month;

/// The unit at which two dates count as "the same" or "ordered".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Day,
    #[default]
    Month,
    Year,
}

impl Granularity {
    /// Compare two dates after truncating both to this unit.
    pub fn compare(self, a: NaiveDate, b: NaiveDate) -> Ordering {
        self.unit_key(a).cmp(&self.unit_key(b))
    }

    /// Whether both dates fall in the same unit.
    pub fn is_same(self, a: NaiveDate, b: NaiveDate) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Whether `a` falls in a strictly earlier unit than `b`.
    pub fn is_before(self, a: NaiveDate, b: NaiveDate) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Last day of the unit containing `date`.
    pub fn unit_end(self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Month => last_of_month(date),
            Granularity::Year => NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
        }
    }

    fn unit_key(self, date: NaiveDate) -> (i32, u32, u32) {
        match self {
            Granularity::Day => (date.year(), date.month(), date.day()),
            Granularity::Month => (date.year(), date.month(), 0),
            Granularity::Year => (date.year(), 0, 0),
        }
    }
}

/// How the scrolling grid is split into sections and items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridLayout {
    /// One section per year, one item per month (items 1..=12).
    #[default]
    YearOfMonths,
    /// One section per month, one item per day.
    MonthOfDays,
}

impl GridLayout {
    /// The granularity cells of this layout are compared at.
    pub fn granularity(self) -> Granularity {
        match self {
            GridLayout::YearOfMonths => Granularity::Month,
            GridLayout::MonthOfDays => Granularity::Day,
        }
    }

    /// Months spanned by one section.
    pub fn months_per_section(self) -> u32 {
        match self {
            GridLayout::YearOfMonths => 12,
            GridLayout::MonthOfDays => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_granularity_ignores_day() {
        let g = Granularity::Month;
        assert!(g.is_same(ymd(2024, 3, 1), ymd(2024, 3, 31)));
        assert!(g.is_before(ymd(2024, 3, 31), ymd(2024, 4, 1)));
        assert!(!g.is_before(ymd(2024, 3, 1), ymd(2024, 3, 20)));
    }

    #[test]
    fn test_day_granularity_orders_days() {
        let g = Granularity::Day;
        assert!(g.is_before(ymd(2024, 3, 1), ymd(2024, 3, 2)));
        assert!(!g.is_same(ymd(2024, 3, 1), ymd(2024, 3, 2)));
    }

    #[test]
    fn test_year_granularity_compares_years() {
        let g = Granularity::Year;
        assert!(g.is_same(ymd(2024, 1, 1), ymd(2024, 12, 31)));
        assert_eq!(g.compare(ymd(2025, 1, 1), ymd(2024, 12, 31)), Ordering::Greater);
    }

    #[test_case(Granularity::Day, ymd(2024, 6, 12), ymd(2024, 6, 12); "day keeps date")]
    #[test_case(Granularity::Month, ymd(2024, 6, 1), ymd(2024, 6, 30); "month ends on last day")]
    #[test_case(Granularity::Month, ymd(2023, 2, 1), ymd(2023, 2, 28); "february")]
    #[test_case(Granularity::Year, ymd(2024, 6, 1), ymd(2024, 12, 31); "year ends on new years eve")]
    fn test_unit_end(granularity: Granularity, date: NaiveDate, expected: NaiveDate) {
        assert_eq!(granularity.unit_end(date), expected);
    }

    #[test]
    fn test_layout_granularity() {
        assert_eq!(GridLayout::YearOfMonths.granularity(), Granularity::Month);
        assert_eq!(GridLayout::MonthOfDays.granularity(), Granularity::Day);
        assert_eq!(GridLayout::default(), GridLayout::YearOfMonths);
    }
}
