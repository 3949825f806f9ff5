//! RGB color model.
//!
//! Colors are plain value triples with one `u8` per channel. The widget
//! renders them in the CSS `rgb(r, g, b)` form and derives its whole
//! scheme from the channel-wise complement and a perceptual luminance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Luminance above which a color counts as light. Exactly 128.0 is dark.
pub const LIGHTNESS_THRESHOLD: f64 = 128.0;

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// An RGB color with channels in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise inverse: every channel becomes `255 - channel`.
    pub const fn complement(self) -> Self {
        Self {
            r: u8::MAX - self.r,
            g: u8::MAX - self.g,
            b: u8::MAX - self.b,
        }
    }

    /// Perceptual-weighted luminance `0.299 R + 0.587 G + 0.114 B`.
    ///
    /// This is a lightness proxy, not a colorimetric (linear-light) value.
    pub fn luminance(self) -> f64 {
        RED_WEIGHT * f64::from(self.r)
            + GREEN_WEIGHT * f64::from(self.g)
            + BLUE_WEIGHT * f64::from(self.b)
    }

    /// Whether this color reads as light against [`LIGHTNESS_THRESHOLD`].
    pub fn is_light(self) -> bool {
        is_light_luminance(self.luminance())
    }

    /// Parse a CSS color, substituting black for anything malformed.
    ///
    /// Complement and lightness computed from a bad string are therefore
    /// computed against `(0, 0, 0)`.
    pub fn from_css_lossy(input: &str) -> Self {
        match input.parse() {
            Ok(color) => color,
            Err(err) => {
                log::debug!("Malformed color '{}' ({}), falling back to black", input, err);
                Self::BLACK
            }
        }
    }

    /// Hex form for display, e.g. `#FF8040`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Threshold rule on its own, for callers that already hold a luminance.
pub fn is_light_luminance(luminance: f64) -> bool {
    luminance > LIGHTNESS_THRESHOLD
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Reasons a CSS color string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("missing closing parenthesis in color '{0}'")]
    UnclosedParen(String),
    #[error("expected 3 color channels, found {0}")]
    ChannelCount(usize),
    #[error("invalid {channel} value '{value}' (expected an integer 0-255)")]
    InvalidChannel { channel: &'static str, value: String },
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts `rgb(r, g, b)` or a bare `r, g, b`, with decimal channels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // CSS function names are case-insensitive.
        let has_prefix = trimmed
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb("));
        let body = if has_prefix {
            trimmed[4..]
                .strip_suffix(')')
                .ok_or_else(|| ColorParseError::UnclosedParen(trimmed.to_string()))?
        } else {
            trimmed
        };

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ColorParseError::ChannelCount(parts.len()));
        }

        let channel = |name: &'static str, value: &str| -> Result<u8, ColorParseError> {
            if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ColorParseError::InvalidChannel {
                    channel: name,
                    value: value.to_string(),
                });
            }
            value.parse::<u8>().map_err(|_| ColorParseError::InvalidChannel {
                channel: name,
                value: value.to_string(),
            })
        };

        Ok(Self {
            r: channel("red", parts[0])?,
            g: channel("green", parts[1])?,
            b: channel("blue", parts[2])?,
        })
    }
}
