//! Two-tap range selection.
//!
//! The first tap picks a start, a later tap picks the end, and any tap after
//! that starts over. Each state is computed in full before it replaces the
//! previous one, so [`RangeSelectionModel::classify`] never sees a half-applied
//! tap.

use chrono::NaiveDate;

use crate::models::granularity::Granularity;
use crate::models::selection::{CellState, RangeEdge, SelectionState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Both a start and an end date must be selected")]
    IncompleteSelection,
    #[error("Invalid selection: end ({end}) must come after start ({start})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Invalid selection: end ({0}) has no start date")]
    EndWithoutStart(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSelectionModel {
    granularity: Granularity,
    state: SelectionState,
}

impl RangeSelectionModel {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            state: SelectionState::Empty,
        }
    }

    /// Seed the model with a previously picked selection.
    pub fn with_selection(
        granularity: Granularity,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, SelectionError> {
        let state = match (start, end) {
            (None, None) => SelectionState::Empty,
            (Some(start), None) => SelectionState::StartOnly { start },
            (Some(start), Some(end)) if granularity.is_before(start, end) => {
                SelectionState::Complete { start, end }
            }
            (Some(start), Some(end)) => return Err(SelectionError::InvalidRange { start, end }),
            (None, Some(end)) => return Err(SelectionError::EndWithoutStart(end)),
        };
        Ok(Self { granularity, state })
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.state.start()
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.state.end()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Empty;
    }

    pub fn handle_tap(&mut self, tapped: NaiveDate) {
        let next = self.state.advance(tapped, self.granularity);
        log::debug!("Range tap on {}: {:?} -> {:?}", tapped, self.state, next);
        self.state = next;
    }

    pub fn classify(&self, date: NaiveDate) -> CellState {
        let g = self.granularity;
        match self.state {
            SelectionState::Empty => CellState::Empty,
            SelectionState::StartOnly { start } if g.is_same(date, start) => {
                CellState::Selected { edge: None }
            }
            SelectionState::StartOnly { .. } => CellState::Empty,
            SelectionState::Complete { start, end } => {
                if g.is_before(start, date) && g.is_before(date, end) {
                    CellState::InRange
                } else if g.is_same(date, start) {
                    CellState::Selected {
                        edge: Some(RangeEdge::Right),
                    }
                } else if g.is_same(date, end) {
                    CellState::Selected {
                        edge: Some(RangeEdge::Left),
                    }
                } else {
                    CellState::Empty
                }
            }
        }
    }

    /// The picked range with the end expanded to the last day of its unit,
    /// so a month cell covers the whole month. Does not change the selection.
    pub fn confirm(&self) -> Result<(NaiveDate, NaiveDate), SelectionError> {
        match self.state {
            SelectionState::Complete { start, end } => Ok((start, self.granularity.unit_end(end))),
            _ => Err(SelectionError::IncompleteSelection),
        }
    }
}

impl Default for RangeSelectionModel {
    fn default() -> Self {
        Self::new(Granularity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march_to_june() -> RangeSelectionModel {
        let mut model = RangeSelectionModel::new(Granularity::Month);
        model.handle_tap(ymd(2024, 3, 1));
        model.handle_tap(ymd(2024, 6, 1));
        model
    }

    #[test]
    fn test_new_model_is_empty() {
        let model = RangeSelectionModel::default();
        assert_eq!(model.state(), SelectionState::Empty);
        assert_eq!(model.granularity(), Granularity::Month);
        assert_eq!(model.classify(ymd(2024, 3, 1)), CellState::Empty);
    }

    #[test]
    fn test_two_forward_taps_complete_the_range() {
        let model = march_to_june();
        assert!(model.is_complete());
        assert_eq!(model.start(), Some(ymd(2024, 3, 1)));
        assert_eq!(model.end(), Some(ymd(2024, 6, 1)));
    }

    #[test]
    fn test_backward_tap_restarts_start_pick() {
        let mut model = RangeSelectionModel::new(Granularity::Month);
        model.handle_tap(ymd(2024, 6, 1));
        model.handle_tap(ymd(2024, 3, 1));
        assert_eq!(model.state(), SelectionState::StartOnly { start: ymd(2024, 3, 1) });
    }

    #[test]
    fn test_repeat_tap_does_not_complete() {
        let mut model = RangeSelectionModel::new(Granularity::Month);
        model.handle_tap(ymd(2024, 6, 1));
        model.handle_tap(ymd(2024, 6, 1));
        assert_eq!(model.state(), SelectionState::StartOnly { start: ymd(2024, 6, 1) });
    }

    #[test]
    fn test_third_tap_resets() {
        let mut model = march_to_june();
        model.handle_tap(ymd(2024, 8, 1));
        assert_eq!(model.state(), SelectionState::StartOnly { start: ymd(2024, 8, 1) });
    }

    #[test_case(ymd(2024, 2, 1), CellState::Empty; "before start")]
    #[test_case(ymd(2024, 3, 1), CellState::Selected { edge: Some(RangeEdge::Right) }; "start")]
    #[test_case(ymd(2024, 4, 1), CellState::InRange; "april")]
    #[test_case(ymd(2024, 5, 1), CellState::InRange; "may")]
    #[test_case(ymd(2024, 6, 1), CellState::Selected { edge: Some(RangeEdge::Left) }; "end")]
    #[test_case(ymd(2024, 7, 1), CellState::Empty; "after end")]
    #[test_case(ymd(2025, 4, 1), CellState::Empty; "same month next year")]
    fn test_classify_complete_range(date: NaiveDate, expected: CellState) {
        assert_eq!(march_to_june().classify(date), expected);
    }

    #[test]
    fn test_classify_matches_whole_month() {
        let model = march_to_june();
        assert!(model.classify(ymd(2024, 3, 31)).is_selected());
        assert_eq!(model.classify(ymd(2024, 4, 15)), CellState::InRange);
    }

    #[test]
    fn test_classify_start_only() {
        let mut model = RangeSelectionModel::new(Granularity::Month);
        model.handle_tap(ymd(2024, 3, 1));
        assert_eq!(model.classify(ymd(2024, 3, 1)), CellState::Selected { edge: None });
        assert_eq!(model.classify(ymd(2024, 4, 1)), CellState::Empty);
    }

    #[test]
    fn test_confirm_expands_end_to_last_day_of_month() {
        assert_eq!(
            march_to_june().confirm(),
            Ok((ymd(2024, 3, 1), ymd(2024, 6, 30)))
        );
    }

    #[test]
    fn test_confirm_february_leap_year() {
        let mut model = RangeSelectionModel::new(Granularity::Month);
        model.handle_tap(ymd(2023, 11, 1));
        model.handle_tap(ymd(2024, 2, 1));
        assert_eq!(model.confirm(), Ok((ymd(2023, 11, 1), ymd(2024, 2, 29))));
    }

    #[test]
    fn test_confirm_twice_is_stable() {
        let model = march_to_june();
        assert_eq!(model.confirm(), model.confirm());
        assert_eq!(model.end(), Some(ymd(2024, 6, 1)));
    }

    #[test]
    fn test_confirm_incomplete_fails() {
        let mut model = RangeSelectionModel::new(Granularity::Month);
        assert_eq!(model.confirm(), Err(SelectionError::IncompleteSelection));
        model.handle_tap(ymd(2024, 3, 1));
        assert_eq!(model.confirm(), Err(SelectionError::IncompleteSelection));
    }

    #[test]
    fn test_day_granularity_keeps_end_day() {
        let mut model = RangeSelectionModel::new(Granularity::Day);
        model.handle_tap(ymd(2024, 3, 10));
        model.handle_tap(ymd(2024, 3, 12));
        assert_eq!(model.classify(ymd(2024, 3, 11)), CellState::InRange);
        assert_eq!(model.confirm(), Ok((ymd(2024, 3, 10), ymd(2024, 3, 12))));
    }

    #[test]
    fn test_with_selection() {
        let model = RangeSelectionModel::with_selection(
            Granularity::Month,
            Some(ymd(2024, 3, 1)),
            Some(ymd(2024, 6, 1)),
        )
        .unwrap();
        assert_eq!(model, march_to_june());

        let start_only =
            RangeSelectionModel::with_selection(Granularity::Month, Some(ymd(2024, 3, 1)), None)
                .unwrap();
        assert_eq!(start_only.state(), SelectionState::StartOnly { start: ymd(2024, 3, 1) });
    }

    #[test]
    fn test_with_selection_rejects_invalid_ranges() {
        assert_eq!(
            RangeSelectionModel::with_selection(
                Granularity::Month,
                Some(ymd(2024, 3, 1)),
                Some(ymd(2024, 3, 20)),
            ),
            Err(SelectionError::InvalidRange {
                start: ymd(2024, 3, 1),
                end: ymd(2024, 3, 20)
            })
        );
        assert_eq!(
            RangeSelectionModel::with_selection(Granularity::Month, None, Some(ymd(2024, 3, 1))),
            Err(SelectionError::EndWithoutStart(ymd(2024, 3, 1)))
        );
    }

    #[test]
    fn test_reset_clears_selection() {
        let mut model = march_to_june();
        model.reset();
        assert_eq!(model.state(), SelectionState::Empty);
    }
}
