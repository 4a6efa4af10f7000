//! Selection state and per-cell classification.

use chrono::NaiveDate;

use super::granularity::Granularity;

/// Phase of the two-tap range pick.
///
/// An end date only exists alongside a start date that strictly precedes it,
/// so an inverted or zero-length range cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    StartOnly {
        start: NaiveDate,
    },
    Complete {
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl SelectionState {
    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            SelectionState::Empty => None,
            SelectionState::StartOnly { start } | SelectionState::Complete { start, .. } => {
                Some(start)
            }
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            SelectionState::Complete { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SelectionState::Complete { .. })
    }

    /// The state that follows a tap on `tapped`.
    ///
    /// A tap that is not strictly after the current start restarts the start
    /// pick, and a tap on a complete range always starts a new one.
    pub fn advance(self, tapped: NaiveDate, granularity: Granularity) -> SelectionState {
        match self {
            SelectionState::StartOnly { start } if granularity.is_before(start, tapped) => {
                SelectionState::Complete { start, end: tapped }
            }
            SelectionState::Empty
            | SelectionState::StartOnly { .. }
            | SelectionState::Complete { .. } => SelectionState::StartOnly { start: tapped },
        }
    }
}

/// Side of a selected cell the range highlight attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeEdge {
    /// The highlight comes in from the left (range end).
    Left,
    /// The highlight continues to the right (range start).
    Right,
}

/// How a single cell should render against the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Strictly between the start and end of a complete range.
    InRange,
    /// The start or end cell. `edge` is set once the range is complete.
    Selected { edge: Option<RangeEdge> },
}

impl CellState {
    pub fn is_selected(&self) -> bool {
        matches!(self, CellState::Selected { .. })
    }

    pub fn edge(&self) -> Option<RangeEdge> {
        match *self {
            CellState::Selected { edge } => edge,
            _ => None,
        }
    }
}

/// Result of closing the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Cancelled,
    /// `end` is already expanded to the last day of its unit.
    Picked { start: NaiveDate, end: NaiveDate },
}
