//! Tween engine with scroll-linked triggers for the mauseu page.
//!
//! Callers describe animations declaratively: a target element name, the
//! property values to reach, and either a duration or a scroll trigger that
//! scrubs progress from the page's scroll offset. The engine owns all
//! interpolation and threshold math; registering code never computes either.

mod ease;
mod engine;
mod position;
mod tween;

pub use ease::Easing;
pub use engine::{MotionEngine, MotionError, TriggerMarker};
pub use position::{PositionParseError, TriggerEdge, TriggerPosition};
pub use tween::{PropertyTargets, ScrollTrigger, Tween};
