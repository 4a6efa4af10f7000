// Month Range Picker Application
// Main entry point

use month_range_picker::models::settings::PickerSettings;
use month_range_picker::services::picker::DateRangePicker;
use month_range_picker::services::settings::SettingsService;
use month_range_picker::ui_egui::RangePickerApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Range Picker");

    let settings_service = SettingsService::user_default();
    let settings = settings_service.load_or_default();

    let picker = match DateRangePicker::from_settings(&settings) {
        Ok(picker) => picker,
        Err(err) => {
            log::warn!("Falling back to default picker settings: {:#}", err);
            DateRangePicker::from_settings(&PickerSettings::default())?
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(picker.title())
            .with_inner_size([420.0, 680.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Range Picker",
        options,
        Box::new(move |_cc| Ok(Box::new(RangePickerApp::new(picker)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run picker window: {}", err))
}
