//! Page model, styles, and event plumbing for the mauseu terminal page.
//!
//! The page is a flat arena of styled rectangles laid out in virtual pixels,
//! so the cursor and tween contracts can be stated in pixel constants while
//! the renderer decides how many pixels a terminal cell covers. Input events
//! are published through a synchronous dispatcher; hover enter/leave events
//! are synthesized from raw pointer positions by the hit registry.

mod color;
mod dispatch;
mod event;
mod geometry;
mod hit;
mod page;
mod style;

pub use color::{Color, ColorParseError};
pub use dispatch::{Dispatcher, Handler};
pub use event::InputEvent;
pub use geometry::{Point, Rect, Size};
pub use hit::{HitRegistry, HoverChange};
pub use page::{Element, ElementId, Page, PageError, Role};
pub use style::{Border, ElementStyle, Length};
