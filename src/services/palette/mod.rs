//! Background-derived color scheme.
//!
//! The widget only ever picks one random color, the background. The card
//! fill is its complement and the text treatment follows from whether
//! that complement reads as light.

use crate::models::color::Rgb;
use crate::services::random::RandomSource;

const CHANNEL_VALUES: usize = 256;

/// Draw a uniformly random color: red, green, then blue, independently.
pub fn random_color(rng: &mut dyn RandomSource) -> Rgb {
    // A source that ignores its bound saturates instead of wrapping.
    let mut channel = || u8::try_from(rng.next_below(CHANNEL_VALUES)).unwrap_or(u8::MAX);
    let r = channel();
    let g = channel();
    let b = channel();
    Rgb::new(r, g, b)
}

/// The two-color scheme shown by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: Rgb,
    /// Complement of `background`, used as the card fill
    pub foreground: Rgb,
    pub foreground_is_light: bool,
}

impl ColorScheme {
    pub fn from_background(background: Rgb) -> Self {
        let foreground = background.complement();
        Self {
            background,
            foreground,
            foreground_is_light: foreground.is_light(),
        }
    }

    /// Stroke around quote text: dark on a light card, light on a dark one.
    pub fn outline_color(&self) -> Rgb {
        if self.foreground_is_light {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }

    /// Text drawn straight on the background, outside the card.
    pub fn footer_text_color(&self) -> Rgb {
        if self.foreground_is_light {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::random::{MockRandomSource, ScriptedSource};
    use mockall::predicate::eq;

    #[test]
    fn test_random_color_draws_rgb_in_order() {
        let mut rng = ScriptedSource::new(vec![10, 20, 30]);
        assert_eq!(random_color(&mut rng), Rgb::new(10, 20, 30));
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_random_color_asks_for_full_channel_range() {
        let mut rng = MockRandomSource::new();
        rng.expect_next_below()
            .with(eq(256))
            .times(3)
            .return_const(255usize);
        assert_eq!(random_color(&mut rng), Rgb::WHITE);
    }

    #[test]
    fn test_random_color_saturates_out_of_range_draws() {
        let mut rng = MockRandomSource::new();
        rng.expect_next_below().times(3).return_const(300usize);
        assert_eq!(random_color(&mut rng), Rgb::WHITE);
    }

    #[test]
    fn test_scheme_from_dark_background() {
        let scheme = ColorScheme::from_background(Rgb::new(10, 20, 30));
        assert_eq!(scheme.foreground, Rgb::new(245, 235, 225));
        assert!(scheme.foreground_is_light);
        assert_eq!(scheme.outline_color(), Rgb::BLACK);
        assert_eq!(scheme.footer_text_color(), Rgb::WHITE);
    }

    #[test]
    fn test_scheme_from_white_background() {
        let scheme = ColorScheme::from_background(Rgb::WHITE);
        assert_eq!(scheme.foreground, Rgb::BLACK);
        assert!(!scheme.foreground_is_light);
        assert_eq!(scheme.outline_color(), Rgb::WHITE);
        assert_eq!(scheme.footer_text_color(), Rgb::BLACK);
    }
}
