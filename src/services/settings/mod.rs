// Settings service module
// Loads and saves picker settings as TOML

mod service;

pub use service::SettingsService;
