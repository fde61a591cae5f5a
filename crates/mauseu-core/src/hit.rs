//! Pointer hit testing for hover enter/leave synthesis.
//!
//! The event source owns the hover bookkeeping; handlers only ever see
//! enter/leave transitions. Regions are re-registered every layout pass
//! and the hovered element survives re-registration, so transitions fire
//! only on real boundary crossings.

use crate::geometry::{Point, Rect};
use crate::page::ElementId;

/// A rectangular region mapped to an element for hover tracking.
#[derive(Debug, Clone, Copy)]
struct HitArea {
    rect: Rect,
    element: ElementId,
}

/// Hover transition produced by a pointer update.
///
/// When the pointer crosses directly from one region into another, both
/// fields are set; the leave is published before the enter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverChange {
    pub left: Option<ElementId>,
    pub entered: Option<ElementId>,
}

impl HoverChange {
    pub fn is_none(&self) -> bool {
        self.left.is_none() && self.entered.is_none()
    }
}

/// Tracks which registered region the pointer is inside.
#[derive(Debug, Default)]
pub struct HitRegistry {
    areas: Vec<HitArea>,
    hovered: Option<ElementId>,
}

impl HitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all regions, keeping the hovered element for the next update.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, element: ElementId) {
        self.areas.push(HitArea { rect, element });
    }

    /// Re-evaluate the pointer position. The first matching region wins.
    pub fn update(&mut self, position: Point) -> HoverChange {
        let now = self
            .areas
            .iter()
            .find(|area| area.rect.contains(position))
            .map(|area| area.element);

        if now == self.hovered {
            return HoverChange::default();
        }

        let change = HoverChange {
            left: self.hovered,
            entered: now,
        };
        self.hovered = now;
        change
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }
}
