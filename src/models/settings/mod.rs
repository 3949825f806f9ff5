// Settings module
// Persisted as settings.toml in the platform config directory

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_SHARE_BASE_URL: &str = "https://twitter.com/intent/tweet";

const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 220.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dataset override; the bundled quotes are used when unset
    pub quotes_file: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
    /// Share-intent endpoint the quote text is appended to
    pub share_base_url: String,
    /// Fixed seed for a reproducible sequence of quotes and colors
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quotes_file: None,
            window_width: 900.0,
            window_height: 600.0,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            seed: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !self.window_width.is_finite() || self.window_width < MIN_WINDOW_WIDTH {
            return Err(SettingsValidationError::WindowTooNarrow(self.window_width));
        }
        if !self.window_height.is_finite() || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(SettingsValidationError::WindowTooShort(self.window_height));
        }

        let url = self.share_base_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(SettingsValidationError::InvalidShareUrl(url.to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsValidationError {
    #[error("window width {0} is below the minimum of 320")]
    WindowTooNarrow(f32),
    #[error("window height {0} is below the minimum of 220")]
    WindowTooShort(f32),
    #[error("share URL '{0}' must start with http:// or https://")]
    InvalidShareUrl(String),
}
