//! Grid addressing.
//!
//! Maps a `(section, item)` coordinate of the scrolling grid to the calendar
//! date the cell stands for, and back. Items are 1-indexed. In the default
//! layout a section is a year and an item is a month.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::granularity::GridLayout;
use crate::utils::date::{days_in_month, first_of_month, from_month_index, month_index};

/// Inclusive bounds of the addressable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    minimum: NaiveDate,
    maximum: NaiveDate,
}

impl DateBounds {
    pub fn new(minimum: NaiveDate, maximum: NaiveDate) -> Result<Self, GridError> {
        if minimum > maximum {
            return Err(GridError::InvalidBounds { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> NaiveDate {
        self.minimum
    }

    pub fn maximum(&self) -> NaiveDate {
        self.maximum
    }
}

/// A cell position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoordinate {
    pub section: u32,
    pub item: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Section {section} lies outside the addressable range")]
    OutOfBounds { section: u32 },
    #[error("Invalid date bounds: minimum ({minimum}) is after maximum ({maximum})")]
    InvalidBounds { minimum: NaiveDate, maximum: NaiveDate },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridAddressing {
    bounds: DateBounds,
    layout: GridLayout,
}

impl GridAddressing {
    pub fn new(bounds: DateBounds, layout: GridLayout) -> Self {
        Self { bounds, layout }
    }

    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// The minimum date normalized to the first day of its month.
    pub fn first_addressable_date(&self) -> NaiveDate {
        first_of_month(self.bounds.minimum)
    }

    /// First date of `section`. Fails when the section starts after the
    /// maximum date; it does not clamp.
    pub fn section_origin(&self, section: u32) -> Result<NaiveDate, GridError> {
        let origin = section
            .checked_mul(self.layout.months_per_section())
            .and_then(|months| {
                self.first_addressable_date()
                    .checked_add_months(Months::new(months))
            })
            .ok_or(GridError::OutOfBounds { section })?;

        if origin > self.bounds.maximum {
            return Err(GridError::OutOfBounds { section });
        }
        Ok(origin)
    }

    /// Number of sections whose origin is not after the maximum date.
    pub fn section_count(&self) -> u32 {
        // Origins are first-of-month, so comparing month indices is enough.
        let span = month_index(self.bounds.maximum) - month_index(self.first_addressable_date());
        let per_section = i64::from(self.layout.months_per_section());
        u32::try_from(span / per_section + 1).unwrap_or(u32::MAX)
    }

    pub fn items_in_section(&self, section: u32) -> Result<u32, GridError> {
        let origin = self.section_origin(section)?;
        Ok(match self.layout {
            GridLayout::YearOfMonths => 12,
            GridLayout::MonthOfDays => days_in_month(origin),
        })
    }

    /// Date of the cell at `item` within `section`.
    ///
    /// Items outside the section roll over by calendar arithmetic: month 13
    /// is January of the next year, month 0 is December of the previous one.
    pub fn date_for_coordinate(&self, section: u32, item: i32) -> Result<NaiveDate, GridError> {
        let origin = self.section_origin(section)?;
        let date = match self.layout {
            GridLayout::YearOfMonths => {
                from_month_index(i64::from(origin.year()) * 12 + i64::from(item) - 1)
            }
            GridLayout::MonthOfDays => {
                origin.checked_add_signed(Duration::days(i64::from(item) - 1))
            }
        };
        date.ok_or(GridError::OutOfBounds { section })
    }

    /// Inverse of [`Self::date_for_coordinate`] for in-section items.
    pub fn coordinate_for_date(&self, date: NaiveDate) -> Option<GridCoordinate> {
        let first = self.first_addressable_date();
        let (section, item) = match self.layout {
            GridLayout::YearOfMonths => (
                i64::from(date.year()) - i64::from(first.year()),
                date.month(),
            ),
            GridLayout::MonthOfDays => (month_index(date) - month_index(first), date.day()),
        };

        let section = u32::try_from(section).ok()?;
        if section >= self.section_count() {
            return None;
        }
        Some(GridCoordinate {
            section,
            item: i32::try_from(item).ok()?,
        })
    }

    pub fn days_in_month(&self, date: NaiveDate) -> u32 {
        days_in_month(date)
    }

    /// Whether `date` is the last item of its section (December, or the
    /// last day of the month).
    pub fn is_trailing_grid_position(&self, date: NaiveDate) -> bool {
        match self.layout {
            GridLayout::YearOfMonths => date.month() == 12,
            GridLayout::MonthOfDays => date.day() == days_in_month(date),
        }
    }

    pub fn section_label(&self, section: u32) -> Result<String, GridError> {
        let origin = self.section_origin(section)?;
        Ok(match self.layout {
            GridLayout::YearOfMonths => origin.format("%Y").to_string(),
            GridLayout::MonthOfDays => origin.format("%B %Y").to_string(),
        })
    }

    pub fn item_label(&self, section: u32, item: i32) -> Result<String, GridError> {
        let date = self.date_for_coordinate(section, item)?;
        Ok(match self.layout {
            GridLayout::YearOfMonths => date.format("%b").to_string(),
            GridLayout::MonthOfDays => date.day().to_string(),
        })
    }
}
