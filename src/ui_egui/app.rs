use chrono::NaiveDate;

use crate::models::selection::PickerOutcome;
use crate::services::picker::{DateRangePicker, DateRangePickerDelegate};
use crate::ui_egui::views::range_grid::RangeGridView;
use crate::ui_egui::views::RangeCellPalette;

/// Remembers what the picker reported last.
#[derive(Default)]
struct OutcomeRecorder {
    last: Option<PickerOutcome>,
}

impl DateRangePickerDelegate for OutcomeRecorder {
    fn did_cancel_picking_date_range(&mut self) {
        self.last = Some(PickerOutcome::Cancelled);
    }

    fn did_pick_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.last = Some(PickerOutcome::Picked { start, end });
    }
}

pub struct RangePickerApp {
    picker: DateRangePicker,
    outcome: OutcomeRecorder,
}

impl RangePickerApp {
    pub fn new(picker: DateRangePicker) -> Self {
        Self {
            picker,
            outcome: OutcomeRecorder::default(),
        }
    }

    fn status_text(&self) -> String {
        let fmt = |date: NaiveDate| date.format("%d %b %Y").to_string();
        match self.outcome.last {
            Some(PickerOutcome::Picked { start, end }) => {
                format!("Picked {} to {}", fmt(start), fmt(end))
            }
            Some(PickerOutcome::Cancelled) => "Cancelled".to_string(),
            None => match (self.picker.selection().start(), self.picker.selection().end()) {
                (None, _) => "Tap to pick a start date".to_string(),
                (Some(start), None) => format!("From {}, tap a later date to finish", fmt(start)),
                (Some(start), Some(end)) => format!("{} to {}", fmt(start), fmt(end)),
            },
        }
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("range_picker_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    self.picker.did_tap_cancel(&mut self.outcome);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let done = ui.add_enabled(self.picker.can_confirm(), egui::Button::new("Done"));
                    if done.clicked() {
                        if let Err(err) = self.picker.did_tap_done(&mut self.outcome) {
                            log::warn!("Done pressed without a complete range: {}", err);
                        }
                    }

                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| ui.strong(self.picker.title()),
                    );
                });
            });
        });
    }
}

impl eframe::App for RangePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let palette = RangeCellPalette::new(self.picker.accent_color(), &ctx.style().visuals);

        self.render_toolbar(ctx);

        egui::TopBottomPanel::bottom("range_picker_status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let before = self.picker.selection().state();
                    RangeGridView::show(ui, &mut self.picker, &palette);
                    if self.picker.selection().state() != before {
                        // A new pick supersedes the last reported outcome.
                        self.outcome.last = None;
                    }
                });
        });
    }
}
