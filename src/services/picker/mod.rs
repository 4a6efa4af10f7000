//! Picker session.
//!
//! Ties the grid, the selection model and the presentation settings
//! together for one opening of the picker. The UI routes taps here by
//! coordinate and asks for each visible cell's state.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::models::selection::{CellState, PickerOutcome};
use crate::models::settings::PickerSettings;
use crate::services::grid::{DateBounds, GridAddressing, GridError};
use crate::services::selection::{RangeSelectionModel, SelectionError};

/// Receives the outcome of the picker.
#[cfg_attr(test, mockall::automock)]
pub trait DateRangePickerDelegate {
    fn did_cancel_picking_date_range(&mut self);
    fn did_pick_date_range(&mut self, start: NaiveDate, end: NaiveDate);
}

#[derive(Debug, Clone)]
pub struct DateRangePicker {
    grid: GridAddressing,
    selection: RangeSelectionModel,
    timezone: Tz,
    title: String,
    accent_color: (u8, u8, u8),
}

impl DateRangePicker {
    /// Build a picker, resolving default bounds relative to `today`.
    pub fn new(settings: &PickerSettings, today: NaiveDate) -> Result<Self> {
        settings
            .validate()
            .context("Invalid picker settings")?;

        let timezone = settings
            .parse_timezone()
            .with_context(|| format!("Unknown timezone '{}'", settings.timezone))?;
        let accent_color = settings
            .accent_rgb()
            .with_context(|| format!("Invalid accent color '{}'", settings.accent_color))?;

        let (minimum, maximum) = settings.resolve_bounds(today);
        let bounds = DateBounds::new(minimum, maximum).context("Invalid picker bounds")?;
        let grid = GridAddressing::new(bounds, settings.layout);

        let selection = RangeSelectionModel::with_selection(
            settings.layout.granularity(),
            settings.selected_start,
            settings.selected_end,
        )
        .context("Invalid initial selection")?;

        log::info!(
            "Opened range picker: {} to {} ({} sections, {:?})",
            minimum,
            maximum,
            grid.section_count(),
            settings.layout
        );

        Ok(Self {
            grid,
            selection,
            timezone,
            title: settings.title.clone(),
            accent_color,
        })
    }

    /// Build a picker using today's date in the configured timezone.
    pub fn from_settings(settings: &PickerSettings) -> Result<Self> {
        let timezone = settings
            .parse_timezone()
            .with_context(|| format!("Unknown timezone '{}'", settings.timezone))?;
        let today = Utc::now().with_timezone(&timezone).date_naive();
        Self::new(settings, today)
    }

    pub fn grid(&self) -> &GridAddressing {
        &self.grid
    }

    pub fn selection(&self) -> &RangeSelectionModel {
        &self.selection
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn accent_color(&self) -> (u8, u8, u8) {
        self.accent_color
    }

    /// Apply a tap on a grid cell and return the cell's new state.
    pub fn tap(&mut self, section: u32, item: i32) -> Result<CellState, GridError> {
        let date = self.grid.date_for_coordinate(section, item)?;
        self.selection.handle_tap(date);
        Ok(self.selection.classify(date))
    }

    pub fn classify(&self, date: NaiveDate) -> CellState {
        self.selection.classify(date)
    }

    pub fn classify_coordinate(&self, section: u32, item: i32) -> Result<CellState, GridError> {
        let date = self.grid.date_for_coordinate(section, item)?;
        Ok(self.selection.classify(date))
    }

    pub fn is_trailing_grid_position(&self, date: NaiveDate) -> bool {
        self.grid.is_trailing_grid_position(date)
    }

    /// Whether "Done" should be enabled.
    pub fn can_confirm(&self) -> bool {
        self.selection.is_complete()
    }

    pub fn finish(&self) -> Result<PickerOutcome, SelectionError> {
        let (start, end) = self.selection.confirm()?;
        log::info!("Picked date range {} to {}", start, end);
        Ok(PickerOutcome::Picked { start, end })
    }

    pub fn cancel(&self) -> PickerOutcome {
        log::info!("Cancelled picking date range");
        PickerOutcome::Cancelled
    }

    /// Report the picked range. The delegate is not called unless both
    /// dates are set.
    pub fn did_tap_done(
        &self,
        delegate: &mut dyn DateRangePickerDelegate,
    ) -> Result<(), SelectionError> {
        if let PickerOutcome::Picked { start, end } = self.finish()? {
            delegate.did_pick_date_range(start, end);
        }
        Ok(())
    }

    pub fn did_tap_cancel(&self, delegate: &mut dyn DateRangePickerDelegate) {
        self.cancel();
        delegate.did_cancel_picking_date_range();
    }
}
