//! Input events published to the interaction layer.

use crate::geometry::Point;
use crate::page::ElementId;

/// A pointer or scroll event in page coordinates.
///
/// Enter/leave events are synthesized by the event source from raw pointer
/// positions (see [`crate::HitRegistry`]); subscribers never deal with
/// terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to a new position, in virtual pixels.
    PointerMoved { position: Point },
    /// The pointer crossed into a tracked element.
    PointerEntered { element: ElementId },
    /// The pointer crossed out of a tracked element.
    PointerLeft { element: ElementId },
    /// The page scroll offset changed to `offset`.
    Scrolled { offset: f32 },
}
