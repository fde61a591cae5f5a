//! Trigger positions: where in the viewport a tween starts and ends.
//!
//! A position pairs an edge of the trigger element with a viewport line,
//! written the way stylesheet-adjacent tooling writes them: `"top -10%"`,
//! `"bottom top"`. The line may be a keyword (`top`, `center`, `bottom`)
//! or a signed percentage of viewport height; negative percentages sit
//! above the viewport.

use std::fmt;
use std::str::FromStr;

use mauseu_core::Rect;
use thiserror::Error;

/// Error raised when a trigger position string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized trigger position `{0}`")]
pub struct PositionParseError(pub String);

/// Which edge of the trigger element is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEdge {
    Top,
    Bottom,
}

/// A scroll threshold: the tracked edge meets a line across the viewport.
///
/// The line is stored as a percentage of viewport height measured from the
/// viewport top, so `0` is the top edge, `100` the bottom edge, and `-10`
/// a line one tenth of a viewport above the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    pub edge: TriggerEdge,
    pub line: f32,
}

impl TriggerPosition {
    /// Default start: the element's top edge meets the viewport bottom.
    pub const DEFAULT_START: Self = Self {
        edge: TriggerEdge::Top,
        line: 100.0,
    };

    /// Default end: the element's bottom edge meets the viewport top.
    pub const DEFAULT_END: Self = Self {
        edge: TriggerEdge::Bottom,
        line: 0.0,
    };

    /// The scroll offset at which this position is reached.
    ///
    /// The tracked edge sits at `edge_y - scroll` in viewport space, so the
    /// crossing happens at `scroll = edge_y - line`.
    pub fn threshold(&self, trigger: &Rect, viewport_height: f32) -> f32 {
        let edge_y = match self.edge {
            TriggerEdge::Top => trigger.top(),
            TriggerEdge::Bottom => trigger.bottom(),
        };
        edge_y - self.line / 100.0 * viewport_height
    }
}

impl FromStr for TriggerPosition {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PositionParseError(s.to_string());

        let mut tokens = s.split_whitespace();
        let edge = match tokens.next() {
            Some("top") => TriggerEdge::Top,
            Some("bottom") => TriggerEdge::Bottom,
            _ => return Err(malformed()),
        };
        let line = match tokens.next() {
            Some("top") => 0.0,
            Some("center") => 50.0,
            Some("bottom") => 100.0,
            Some(percent) => percent
                .strip_suffix('%')
                .and_then(|n| n.parse::<f32>().ok())
                .ok_or_else(malformed)?,
            None => return Err(malformed()),
        };
        if tokens.next().is_some() {
            return Err(malformed());
        }
        Ok(Self { edge, line })
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            TriggerEdge::Top => "top",
            TriggerEdge::Bottom => "bottom",
        };
        write!(f, "{edge} {}%", self.line)
    }
}
