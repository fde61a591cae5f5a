//! Declarative tween descriptions submitted to the engine.

use mauseu_core::{Color, Length};

use crate::ease::Easing;
use crate::position::TriggerPosition;

/// Seconds a tween plays for when no scroll trigger drives it.
pub const DEFAULT_DURATION: f32 = 0.5;

/// End-values for the style properties a tween may move.
///
/// Only set properties animate; their starting values are captured from the
/// target element when the tween is registered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PropertyTargets {
    pub background: Option<Color>,
    pub height: Option<Length>,
    pub left: Option<Length>,
    pub top: Option<Length>,
    pub scale: Option<f32>,
}

/// Scroll-linked driving configuration for a tween.
///
/// `trigger` names the element whose position defines the start and end
/// thresholds. `scroller` names the scroll container; `None` and `"body"`
/// both select the page root, which is the only container that scrolls.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    pub trigger: String,
    pub scroller: Option<String>,
    /// Threshold where progress is 0; defaults to `top bottom`.
    pub start: Option<TriggerPosition>,
    /// Threshold where progress is 1; defaults to `bottom top`.
    pub end: Option<TriggerPosition>,
    /// Catch-up time in seconds for scrubbed progress; 0 snaps.
    pub scrub: f32,
}

impl ScrollTrigger {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            scroller: None,
            start: None,
            end: None,
            scrub: 0.0,
        }
    }

    pub fn scroller(mut self, scroller: impl Into<String>) -> Self {
        self.scroller = Some(scroller.into());
        self
    }

    pub fn start(mut self, start: TriggerPosition) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: TriggerPosition) -> Self {
        self.end = Some(end);
        self
    }

    pub fn scrub(mut self, scrub: f32) -> Self {
        self.scrub = scrub;
        self
    }
}

/// A tween: target element, property end-values, and how progress is driven.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub(crate) target: String,
    pub(crate) to: PropertyTargets,
    pub(crate) duration: f32,
    pub(crate) ease: Easing,
    pub(crate) scroll_trigger: Option<ScrollTrigger>,
}

impl Tween {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            to: PropertyTargets::default(),
            duration: DEFAULT_DURATION,
            ease: Easing::default(),
            scroll_trigger: None,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.to.background = Some(color);
        self
    }

    pub fn height(mut self, height: Length) -> Self {
        self.to.height = Some(height);
        self
    }

    pub fn left(mut self, left: Length) -> Self {
        self.to.left = Some(left);
        self
    }

    pub fn top(mut self, top: Length) -> Self {
        self.to.top = Some(top);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.to.scale = Some(scale);
        self
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    pub fn scroll_trigger(mut self, trigger: ScrollTrigger) -> Self {
        self.scroll_trigger = Some(trigger);
        self
    }
}
