// Integration tests for settings persistence and dataset loading

mod fixtures;

use pretty_assertions::assert_eq;
use quote_canvas::models::settings::Settings;
use quote_canvas::services::quotes::{QuoteCatalog, QuoteError};
use quote_canvas::services::random::ScriptedSource;
use quote_canvas::services::settings::SettingsService;
use quote_canvas::services::view_state::ViewState;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_settings_persistence() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let service = SettingsService::new(dir.path().join("settings.toml"));

    // Get default settings
    let mut settings = service.get().expect("Failed to get settings");
    assert_eq!(settings, Settings::default());

    // Update settings to simulate a configured install
    settings.seed = Some(7);
    settings.window_width = 1024.0;
    settings.share_base_url = "https://example.com/share".to_string();
    service.update(&settings).expect("Failed to update settings");

    // Verify persistence by reading again
    let loaded = service.get().expect("Failed to load settings");
    assert_eq!(loaded, settings);
}

#[test]
fn test_app_lifecycle_simulation() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings_path = dir.path().join("config").join("settings.toml");
    let quotes_path = dir.path().join("quotes.json");

    fs::write(
        &quotes_path,
        serde_json::to_string(&fixtures::three_quotes()).unwrap(),
    )
    .expect("Failed to write quotes");

    // Simulate first launch: user points the app at their own dataset
    {
        let service = SettingsService::new(&settings_path);
        let mut settings = service.get().expect("Failed to get settings");
        settings.quotes_file = Some(quotes_path.clone());
        settings.seed = Some(3);
        service.update(&settings).expect("Failed to save settings");
    }

    // Simulate second launch: the dataset choice persists and loads
    {
        let service = SettingsService::new(&settings_path);
        let settings = service.get().expect("Failed to load settings");
        assert_eq!(settings.quotes_file.as_deref(), Some(quotes_path.as_path()));

        let catalog = QuoteCatalog::from_settings(&settings).expect("Failed to load quotes");
        assert_eq!(catalog.as_slice(), fixtures::three_quotes().as_slice());

        let mut rng = ScriptedSource::new(vec![1, 2, 3, 2]);
        let state = ViewState::new(catalog, &mut rng);
        assert_eq!(state.current_quote().author, "Aristotle");
    }
}

#[test]
fn test_empty_dataset_file_is_fatal() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let quotes_path = dir.path().join("empty.json");
    fs::write(&quotes_path, "[]").unwrap();

    let settings = Settings {
        quotes_file: Some(quotes_path),
        ..Settings::default()
    };
    let err = QuoteCatalog::from_settings(&settings).unwrap_err();
    assert_eq!(
        err.root_cause().downcast_ref::<QuoteError>(),
        Some(&QuoteError::EmptyDataset)
    );
}

#[test]
fn test_invalid_settings_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "share_base_url = \"ftp://nowhere\"\n").unwrap();

    let service = SettingsService::new(&path);
    assert!(service.get().is_err());
    assert_eq!(service.load_or_default(), Settings::default());
}
