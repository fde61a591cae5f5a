//! Color values and color math shared by styling, tweening, and rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An RGBA color in the page model.
///
/// Alpha participates in interpolation so fades involving `transparent`
/// behave like the stylesheet values they replace; the terminal itself has
/// no alpha, so rendering treats anything fully transparent as "unpainted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color `{0}`")]
pub struct ColorParseError(pub String);

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// An opaque color from red/green/blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Interpolate toward `other` channel-wise. `t` is clamped to 0..=1.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Relative luminance in 0..=1, used to pick readable text colors.
    pub fn luminance(self) -> f32 {
        (0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32) / 255.0
    }

    /// Convert to a terminal color. Fully transparent has no terminal form
    /// and yields `None`; partial alpha is flattened to its channels.
    pub fn to_ratatui(self) -> Option<ratatui::style::Color> {
        if self.is_transparent() {
            None
        } else {
            Some(ratatui::style::Color::Rgb(self.r, self.g, self.b))
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#RGB`, `#RRGGBB`, and the keywords `transparent`, `white`,
    /// and `black`, the forms the page styles actually use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "transparent" => return Ok(Color::TRANSPARENT),
            "white" => return Ok(Color::WHITE),
            "black" => return Ok(Color::BLACK),
            _ => {}
        }

        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        let digit = |c: char| c.to_digit(16).map(|d| d as u8);

        let channels: Vec<u8> = match hex.len() {
            // #RGB expands each digit, CSS style
            3 => hex.chars().map(|c| digit(c).map(|d| d * 17)).collect::<Option<_>>(),
            6 => hex
                .as_bytes()
                .chunks(2)
                .map(|pair| {
                    let hi = digit(pair[0] as char)?;
                    let lo = digit(pair[1] as char)?;
                    Some(hi * 16 + lo)
                })
                .collect::<Option<_>>(),
            _ => None,
        }
        .ok_or_else(|| ColorParseError(s.to_string()))?;

        Ok(Color::rgb(channels[0], channels[1], channels[2]))
    }
}

impl fmt::Display for Color {
    /// Formats the keyword colors as keywords and everything else as hex,
    /// matching the forms style values are written in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transparent() {
            write!(f, "transparent")
        } else if *self == Color::WHITE {
            write!(f, "white")
        } else if *self == Color::BLACK {
            write!(f, "black")
        } else {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        let accent: Color = "#95C11E".parse().unwrap();
        assert_eq!(accent, Color::rgb(0x95, 0xC1, 0x1E));
        assert_eq!(accent.to_string(), "#95C11E");
    }

    #[test]
    fn parses_short_hex_and_keywords() {
        assert_eq!("#000".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("white".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(
            "transparent".parse::<Color>().unwrap(),
            Color::TRANSPARENT
        );
    }

    #[test]
    fn keyword_colors_display_as_keywords() {
        assert_eq!(Color::WHITE.to_string(), "white");
        assert_eq!(Color::BLACK.to_string(), "black");
        assert_eq!(Color::TRANSPARENT.to_string(), "transparent");
        assert_eq!(Color::rgb(0x95, 0xC1, 0x1E).to_string(), "#95C11E");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("95C11E".parse::<Color>().is_err());
        assert!("#95C1".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("greenish".parse::<Color>().is_err());
    }

    #[test]
    fn lerp_midpoint_and_clamp() {
        let from = Color::rgb(200, 100, 0);
        let to = Color::BLACK;
        assert_eq!(from.lerp(to, 0.5), Color::rgb(100, 50, 0));
        assert_eq!(from.lerp(to, -1.0), from);
        assert_eq!(from.lerp(to, 2.0), to);
    }

    #[test]
    fn lerp_carries_alpha() {
        let mid = Color::rgb(100, 100, 100).lerp(Color::TRANSPARENT, 0.5);
        assert_eq!(mid.a, 128);
    }

    #[test]
    fn luminance_ordering() {
        assert!(Color::WHITE.luminance() > 0.9);
        assert!(Color::BLACK.luminance() < 0.1);
        let accent = Color::rgb(0x95, 0xC1, 0x1E);
        assert!(accent.luminance() > Color::BLACK.luminance());
    }

    #[test]
    fn transparent_has_no_terminal_form() {
        assert!(Color::TRANSPARENT.to_ratatui().is_none());
        assert_eq!(
            Color::rgb(1, 2, 3).to_ratatui(),
            Some(ratatui::style::Color::Rgb(1, 2, 3))
        );
    }
}
