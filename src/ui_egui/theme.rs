//! Theme module for the quote window
//!
//! Turns the background-derived [`ColorScheme`] into the egui colors the
//! window paints with, and applies the matching base visuals.

use crate::models::color::Rgb;
use crate::services::palette::ColorScheme;
use egui::Color32;

/// All colors used to paint one frame of the quote window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteTheme {
    /// Whether the card is dark (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background (the random color)
    pub app_background: Color32,

    /// Card fill (the complement)
    pub card_background: Color32,

    /// Quote and author text fill; matches the window background
    pub text_fill: Color32,

    /// Stroke drawn around quote and author text
    pub text_outline: Color32,

    /// Text drawn outside the card
    pub footer_text: Color32,
}

impl QuoteTheme {
    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        Self {
            is_dark: !scheme.foreground_is_light,
            app_background: rgb_to_color32(scheme.background),
            card_background: rgb_to_color32(scheme.foreground),
            text_fill: rgb_to_color32(scheme.background),
            text_outline: rgb_to_color32(scheme.outline_color()),
            footer_text: rgb_to_color32(scheme.footer_text_color()),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        // Buttons sit on the card, so they take the opposite tone to it.
        let mut visuals = if self.is_dark {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        ctx.set_visuals(visuals);
    }
}

pub fn rgb_to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
