use super::{QuoteAction, QuoteApp};

impl QuoteApp {
    pub(super) fn handle_keyboard_shortcuts(&self, ctx: &egui::Context) -> QuoteAction {
        // A focused button already reacts to Space on its own.
        if ctx.wants_keyboard_input() || ctx.memory(|m| m.focused().is_some()) {
            return QuoteAction::None;
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                QuoteAction::Close
            } else if i.modifiers.is_none()
                && (i.key_pressed(egui::Key::Space) || i.key_pressed(egui::Key::N))
            {
                QuoteAction::Randomize
            } else if i.modifiers.is_none() && i.key_pressed(egui::Key::T) {
                QuoteAction::Share
            } else {
                QuoteAction::None
            }
        })
    }
}
