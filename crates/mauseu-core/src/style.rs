//! Element style properties mutated by the interaction layer and the tween
//! engine.

use std::fmt;

use crate::color::Color;

/// A pixel length with stylesheet-flavored formatting (`87.5px`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length(f32);

impl Length {
    pub const fn px(value: f32) -> Self {
        Self(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Interpolate toward `other`. `t` is clamped to 0..=1.
    pub fn lerp(self, other: Length, t: f32) -> Length {
        let t = t.clamp(0.0, 1.0);
        Length(self.0 + (other.0 - self.0) * t)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// A solid border. Solid is the only line style the page uses, so only
/// width and color are modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: Length,
    pub color: Color,
}

impl Border {
    pub const fn new(width: Length, color: Color) -> Self {
        Self { width, color }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} solid {}", self.width, self.color)
    }
}

/// The style block of a page element.
///
/// Only the properties the handlers and tweens actually mutate are modeled;
/// everything else about an element's look belongs to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    /// Horizontal offset, written by the cursor follower.
    pub left: Option<Length>,
    /// Vertical offset, written by the cursor follower.
    pub top: Option<Length>,
    /// Height override; tweens move this toward their target value.
    pub height: Option<Length>,
    /// Scale factor applied around the element center.
    pub scale: f32,
    pub border: Option<Border>,
    pub background: Option<Color>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            left: None,
            top: None,
            height: None,
            scale: 1.0,
            border: None,
            background: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_formats_like_a_stylesheet() {
        assert_eq!(Length::px(87.5).to_string(), "87.5px");
        assert_eq!(Length::px(110.0).to_string(), "110px");
        assert_eq!(Length::px(0.0).to_string(), "0px");
        assert_eq!(Length::px(-12.5).to_string(), "-12.5px");
    }

    #[test]
    fn border_formats_width_and_color() {
        let border = Border::new(Length::px(0.5), Color::WHITE);
        assert_eq!(border.to_string(), "0.5px solid white");

        let accent = Border::new(Length::px(0.0), Color::rgb(0x95, 0xC1, 0x1E));
        assert_eq!(accent.to_string(), "0px solid #95C11E");
    }

    #[test]
    fn length_lerp_clamps() {
        let from = Length::px(80.0);
        let to = Length::px(110.0);
        assert_eq!(from.lerp(to, 0.5), Length::px(95.0));
        assert_eq!(from.lerp(to, 2.0), to);
        assert_eq!(from.lerp(to, -1.0), from);
    }

    #[test]
    fn default_style_is_unscaled_and_empty() {
        let style = ElementStyle::default();
        assert_eq!(style.scale, 1.0);
        assert!(style.left.is_none());
        assert!(style.background.is_none());
    }
}
