// Settings module
// Construction input for the range picker

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::granularity::GridLayout;
use crate::utils::date::shift_months;

pub const DEFAULT_TITLE: &str = "Select Dates";
pub const DEFAULT_ACCENT_COLOR: &str = "#4296F0";
pub const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Earliest addressable date. Defaults to one year before today.
    pub minimum_date: Option<NaiveDate>,
    /// Latest addressable date. Defaults to two years after the minimum.
    pub maximum_date: Option<NaiveDate>,
    /// IANA timezone used to decide what "today" is.
    pub timezone: String,
    pub layout: GridLayout,
    pub accent_color: String,
    pub title: String,
    pub selected_start: Option<NaiveDate>,
    pub selected_end: Option<NaiveDate>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            minimum_date: None,
            maximum_date: None,
            timezone: DEFAULT_TIMEZONE.to_string(),
            layout: GridLayout::default(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            title: DEFAULT_TITLE.to_string(),
            selected_start: None,
            selected_end: None,
        }
    }
}

impl PickerSettings {
    /// Validate the settings data.
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.parse_timezone().is_none() {
            return Err(SettingsValidationError::UnknownTimezone(self.timezone.clone()));
        }

        if self.accent_rgb().is_none() {
            return Err(SettingsValidationError::InvalidColor(self.accent_color.clone()));
        }

        if let (Some(minimum), Some(maximum)) = (self.minimum_date, self.maximum_date) {
            if minimum > maximum {
                return Err(SettingsValidationError::InvertedBounds { minimum, maximum });
            }
        }

        if self.selected_start.is_none() && self.selected_end.is_some() {
            return Err(SettingsValidationError::EndWithoutStart);
        }

        Ok(())
    }

    pub fn parse_timezone(&self) -> Option<Tz> {
        self.timezone.trim().parse::<Tz>().ok()
    }

    /// Accent colour as RGB. Accepts `#RRGGBB`.
    pub fn accent_rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.accent_color.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    /// Inclusive `(minimum, maximum)` bounds, filling unset values relative
    /// to `today`.
    pub fn resolve_bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let minimum = self
            .minimum_date
            .unwrap_or_else(|| shift_months(today, -12).unwrap_or(today));
        let maximum = self
            .maximum_date
            .unwrap_or_else(|| shift_months(minimum, 24).unwrap_or(minimum));
        (minimum, maximum)
    }
}

/// Validation errors for PickerSettings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsValidationError {
    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),
    #[error("Invalid accent color '{0}' (use hex like #4296F0)")]
    InvalidColor(String),
    #[error("Minimum date {minimum} is after maximum date {maximum}")]
    InvertedBounds { minimum: NaiveDate, maximum: NaiveDate },
    #[error("An initial end date requires an initial start date")]
    EndWithoutStart,
}
