//! The interaction layer: pointer and scroll events wired to style changes.
//!
//! Everything here is glue. The cursor follower keeps a cursor element under
//! the pointer, the hover handlers swap the cursor between two fixed looks
//! over navigation headings, and the bind step submits two scroll-scrubbed
//! tweens to the motion engine. Element handles are resolved once at bind
//! time; after that every handler is an unconditional O(1) style write.

mod follower;
mod hover;
mod layer;

pub use follower::CursorFollower;
pub use hover::{CursorLook, HoverEmphasis};
pub use layer::{BindError, BindOptions, InteractionLayer};
