//! Scrolling month grid for the range picker.
//!
//! Draws one header per section followed by rows of cells. Each cell asks
//! the picker for its [`CellState`] and paints the selection from that.

use egui::{Align2, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::RangeCellPalette;
use crate::models::granularity::GridLayout;
use crate::models::selection::{CellState, RangeEdge};
use crate::services::picker::DateRangePicker;

const ITEM_HEIGHT: f32 = 60.0;
const HEADER_HEIGHT: f32 = 50.0;
const BAND_HALF_HEIGHT: f32 = 18.0;
const ROW_SPACING: f32 = 5.0;

pub struct RangeGridView;

impl RangeGridView {
    pub(crate) fn show(ui: &mut egui::Ui, picker: &mut DateRangePicker, palette: &RangeCellPalette) {
        let tapped = Self::render_sections(ui, picker, palette);

        if let Some((section, item)) = tapped {
            if let Err(err) = picker.tap(section, item) {
                log::warn!("Ignoring tap on ({}, {}): {}", section, item, err);
            }
        }
    }

    /// Draw every section; returns the coordinate clicked this frame.
    fn render_sections(
        ui: &mut egui::Ui,
        picker: &DateRangePicker,
        palette: &RangeCellPalette,
    ) -> Option<(u32, i32)> {
        let grid = picker.grid();
        let per_row = Self::items_per_row(grid.layout());
        let cell_width = (ui.available_width() / per_row as f32).floor().max(24.0);
        let mut tapped = None;

        for section in 0..grid.section_count() {
            let (Ok(label), Ok(item_count)) =
                (grid.section_label(section), grid.items_in_section(section))
            else {
                continue;
            };

            ui.allocate_ui(Vec2::new(ui.available_width(), HEADER_HEIGHT), |ui| {
                ui.centered_and_justified(|ui| ui.heading(label));
            });

            let items: Vec<i32> = (1..=item_count as i32).collect();
            for row in items.chunks(per_row) {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    for &item in row {
                        if Self::render_cell(ui, picker, palette, section, item, cell_width) {
                            tapped = Some((section, item));
                        }
                    }
                });
                ui.add_space(ROW_SPACING);
            }
        }

        tapped
    }

    fn items_per_row(layout: GridLayout) -> usize {
        match layout {
            GridLayout::YearOfMonths => 6,
            GridLayout::MonthOfDays => 7,
        }
    }

    /// Paint one cell; returns true when it was clicked.
    fn render_cell(
        ui: &mut egui::Ui,
        picker: &DateRangePicker,
        palette: &RangeCellPalette,
        section: u32,
        item: i32,
        cell_width: f32,
    ) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(cell_width, ITEM_HEIGHT), Sense::click());

        let (Ok(date), Ok(label)) = (
            picker.grid().date_for_coordinate(section, item),
            picker.grid().item_label(section, item),
        ) else {
            return false;
        };

        let state = picker.classify(date);
        let painter = ui.painter();
        let center = rect.center();
        let radius = (BAND_HALF_HEIGHT + 2.0).min(cell_width / 2.0);
        let band = Rect::from_min_max(
            Pos2::new(rect.left(), center.y - BAND_HALF_HEIGHT),
            Pos2::new(rect.right(), center.y + BAND_HALF_HEIGHT),
        );

        let text_color = match state {
            CellState::InRange => {
                let rounding = if picker.is_trailing_grid_position(date) {
                    Rounding {
                        nw: BAND_HALF_HEIGHT,
                        ne: 0.0,
                        sw: BAND_HALF_HEIGHT,
                        se: 0.0,
                    }
                } else {
                    Rounding::ZERO
                };
                painter.rect_filled(band, rounding, palette.band);
                palette.text
            }
            CellState::Selected { edge } => {
                match edge {
                    Some(RangeEdge::Right) => {
                        let half = Rect::from_min_max(Pos2::new(center.x, band.top()), band.max);
                        painter.rect_filled(half, 0.0, palette.band);
                    }
                    Some(RangeEdge::Left) => {
                        let half = Rect::from_min_max(band.min, Pos2::new(center.x, band.bottom()));
                        painter.rect_filled(half, 0.0, palette.band);
                    }
                    None => {}
                }
                painter.circle_filled(center, radius, palette.accent);
                palette.selected_text
            }
            CellState::Empty => palette.text,
        };

        if response.hovered() && !state.is_selected() {
            painter.circle_stroke(center, radius, Stroke::new(1.0, palette.hover_ring));
        }

        painter.text(
            center,
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(15.0),
            text_color,
        );

        response.clicked()
    }
}
