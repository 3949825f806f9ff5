//! Displayed quote and color state.
//!
//! `ViewState` is the single owner of what the widget shows. The
//! complementary color and its lightness flag are derived from the
//! background inside [`ViewState::set_background_color`], which is the
//! only way the background changes, so the three always agree.

use crate::models::color::Rgb;
use crate::models::quote::Quote;
use crate::services::palette::{random_color, ColorScheme};
use crate::services::quotes::{QuoteCatalog, QuoteError};
use crate::services::random::RandomSource;

#[derive(Debug, Clone)]
pub struct ViewState {
    catalog: QuoteCatalog,
    quote_index: usize,
    scheme: ColorScheme,
}

impl ViewState {
    /// Initial state: one color draw, then one quote draw.
    pub fn new(catalog: QuoteCatalog, rng: &mut dyn RandomSource) -> Self {
        let background = random_color(rng);
        let quote_index = catalog.pick_index(rng);
        Self {
            catalog,
            quote_index,
            scheme: ColorScheme::from_background(background),
        }
    }

    /// Like [`ViewState::new`] for a raw dataset, which may be empty.
    pub fn from_dataset(quotes: Vec<Quote>, rng: &mut dyn RandomSource) -> Result<Self, QuoteError> {
        Ok(Self::new(QuoteCatalog::new(quotes)?, rng))
    }

    /// A known state, without drawing anything.
    pub fn with_background(
        catalog: QuoteCatalog,
        quote_index: usize,
        background: Rgb,
    ) -> Result<Self, QuoteError> {
        catalog.get(quote_index)?;
        Ok(Self {
            catalog,
            quote_index,
            scheme: ColorScheme::from_background(background),
        })
    }

    /// Replace both quote and background with fresh, independent draws.
    ///
    /// Both are applied before this returns, so a renderer never sees the
    /// new color with the old quote.
    pub fn randomize(&mut self, rng: &mut dyn RandomSource) {
        let background = random_color(rng);
        let quote_index = self.catalog.pick_index(rng);

        self.set_background_color(background);
        self.quote_index = quote_index;

        log::debug!(
            "Randomized view: quote #{} by {}, background {}",
            self.quote_index,
            self.current_quote().author,
            background
        );
    }

    /// Set the background and recompute the derived colors with it.
    pub fn set_background_color(&mut self, background: Rgb) {
        self.scheme = ColorScheme::from_background(background);
    }

    pub fn current_quote(&self) -> &Quote {
        &self.catalog.as_slice()[self.quote_index]
    }

    pub fn quote_index(&self) -> usize {
        self.quote_index
    }

    pub fn background_color(&self) -> Rgb {
        self.scheme.background
    }

    pub fn complementary_color(&self) -> Rgb {
        self.scheme.foreground
    }

    pub fn is_complement_light(&self) -> bool {
        self.scheme.foreground_is_light
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }
}
