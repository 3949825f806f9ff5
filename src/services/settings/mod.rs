// Settings persistence (TOML file in the platform config directory)

mod service;

pub use service::SettingsService;
