use super::QuoteApp;
use crate::models::settings::Settings;
use crate::services::quotes::QuoteCatalog;
use crate::services::random::RngSource;
use crate::services::view_state::ViewState;
use crate::ui_egui::theme::QuoteTheme;

impl QuoteApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, catalog: QuoteCatalog) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => {
                log::info!("Using fixed random seed {}", seed);
                RngSource::seeded(seed)
            }
            None => RngSource::from_entropy(),
        };

        let view = ViewState::new(catalog, &mut rng);
        log::info!(
            "Initial quote by {}, background {}",
            view.current_quote().author,
            view.background_color()
        );

        let active_theme = QuoteTheme::from_scheme(view.scheme());
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            view,
            rng,
            settings,
            active_theme,
        }
    }
}
