//! Card layout for the current quote.

use super::{QuoteAction, QuoteApp};
use crate::models::color::Rgb;
use egui::{Color32, Vec2};

const CARD_ROUNDING: f32 = 8.0;
const CARD_MAX_WIDTH: f32 = 720.0;
const QUOTE_FONT_SIZE: f32 = 30.0;
const AUTHOR_FONT_SIZE: f32 = 22.0;
const BUTTON_FONT_SIZE: f32 = 18.0;
const OUTLINE_WIDTH: f32 = 1.0;

const OUTLINE_OFFSETS: [Vec2; 8] = [
    Vec2::new(-OUTLINE_WIDTH, 0.0),
    Vec2::new(OUTLINE_WIDTH, 0.0),
    Vec2::new(0.0, -OUTLINE_WIDTH),
    Vec2::new(0.0, OUTLINE_WIDTH),
    Vec2::new(-OUTLINE_WIDTH, -OUTLINE_WIDTH),
    Vec2::new(OUTLINE_WIDTH, -OUTLINE_WIDTH),
    Vec2::new(-OUTLINE_WIDTH, OUTLINE_WIDTH),
    Vec2::new(OUTLINE_WIDTH, OUTLINE_WIDTH),
];

impl QuoteApp {
    pub(super) fn render_quote_card(&self, ctx: &egui::Context) -> QuoteAction {
        let theme = self.active_theme;
        let quote = self.view.current_quote();
        let mut action = QuoteAction::None;

        let panel_frame = egui::Frame::central_panel(&ctx.style())
            .fill(theme.app_background)
            .inner_margin(egui::Margin::same(24.0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space((ui.available_height() * 0.15).min(80.0));
                    ui.set_max_width(CARD_MAX_WIDTH);

                    egui::Frame::none()
                        .fill(theme.card_background)
                        .rounding(egui::Rounding::same(CARD_ROUNDING))
                        .inner_margin(egui::Margin::same(24.0))
                        .show(ui, |ui| {
                            ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                                outlined_text(
                                    ui,
                                    &quote.quote,
                                    QUOTE_FONT_SIZE,
                                    theme.text_fill,
                                    theme.text_outline,
                                );
                                ui.add_space(12.0);
                                outlined_text(
                                    ui,
                                    &format!("— {}", quote.author),
                                    AUTHOR_FONT_SIZE,
                                    theme.text_fill,
                                    theme.text_outline,
                                );
                                ui.add_space(20.0);

                                ui.horizontal(|ui| {
                                    if ui.button(button_text("Tweet")).clicked() {
                                        action = QuoteAction::Share;
                                    }
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            if ui.button(button_text("New Quote")).clicked() {
                                                action = QuoteAction::Randomize;
                                            }
                                        },
                                    );
                                });
                            });
                        });

                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(footer_hint(self.view.background_color()))
                            .color(theme.footer_text),
                    );
                });
            });

        action
    }
}

/// Footer line: the background in hex, then the keyboard shortcuts.
fn footer_hint(background: Rgb) -> String {
    format!(
        "{} · Space: new quote · T: share · Esc: quit",
        background.to_hex()
    )
}

fn button_text(label: &str) -> egui::RichText {
    egui::RichText::new(label).strong().size(BUTTON_FONT_SIZE)
}

/// Text filled with one color and stroked with another.
///
/// egui has no text stroke, so the outline is the same galley painted at
/// small offsets underneath the fill.
fn outlined_text(ui: &mut egui::Ui, text: &str, size: f32, fill: Color32, outline: Color32) {
    let font_id = egui::FontId::proportional(size);
    let wrap_width = (ui.available_width() - 2.0 * OUTLINE_WIDTH).max(1.0);

    let fill_galley = ui
        .painter()
        .layout(text.to_owned(), font_id.clone(), fill, wrap_width);
    let outline_galley = ui
        .painter()
        .layout(text.to_owned(), font_id, outline, wrap_width);

    let padding = Vec2::splat(2.0 * OUTLINE_WIDTH);
    let (rect, _) = ui.allocate_exact_size(fill_galley.size() + padding, egui::Sense::hover());
    let origin = rect.min + Vec2::splat(OUTLINE_WIDTH);

    let painter = ui.painter();
    for offset in OUTLINE_OFFSETS {
        painter.galley(origin + offset, outline_galley.clone(), outline);
    }
    painter.galley(origin, fill_galley, fill);
}
