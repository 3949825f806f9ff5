mod lifecycle;
mod render;
mod shortcuts;

use crate::models::settings::Settings;
use crate::services::random::RngSource;
use crate::services::share;
use crate::services::view_state::ViewState;
use crate::ui_egui::theme::QuoteTheme;

/// What the user asked for during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteAction {
    None,
    Randomize,
    Share,
    Close,
}

pub struct QuoteApp {
    /// Quote and colors on screen; the only state the window mutates
    view: ViewState,
    /// Random source for every randomize action
    rng: RngSource,
    settings: Settings,
    /// Colors applied to the egui context for the current view
    active_theme: QuoteTheme,
}

impl eframe::App for QuoteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let shortcut = self.handle_keyboard_shortcuts(ctx);
        self.apply_action(ctx, shortcut);

        let clicked = self.render_quote_card(ctx);
        self.apply_action(ctx, clicked);
    }
}

impl QuoteApp {
    fn apply_action(&mut self, ctx: &egui::Context, action: QuoteAction) {
        match action {
            QuoteAction::None => {}
            QuoteAction::Randomize => self.randomize(ctx),
            QuoteAction::Share => {
                if let Err(e) =
                    share::open_share_link(&self.settings.share_base_url, self.view.current_quote())
                {
                    log::warn!("Failed to open share link: {:#}", e);
                }
            }
            QuoteAction::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    /// New quote and background together, then re-theme before the next paint.
    fn randomize(&mut self, ctx: &egui::Context) {
        self.view.randomize(&mut self.rng);
        self.sync_theme(ctx);
        ctx.request_repaint();
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let theme = QuoteTheme::from_scheme(self.view.scheme());
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }
}
