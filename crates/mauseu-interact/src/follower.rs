//! Keeps the cursor element centered under the pointer.

use mauseu_core::{ElementId, Handler, InputEvent, Length, Page};

/// Recenters the cursor element on every pointer move.
///
/// Writes `left = x - half` and `top = y - half` so the disc's center sits
/// exactly on the pointer. Position is absolute each time; repeated moves to
/// the same point cannot drift.
#[derive(Debug)]
pub struct CursorFollower {
    cursor: ElementId,
    half: f32,
}

impl CursorFollower {
    pub fn new(cursor: ElementId, diameter: f32) -> Self {
        Self {
            cursor,
            half: diameter / 2.0,
        }
    }
}

impl Handler for CursorFollower {
    fn handle(&mut self, event: &InputEvent, page: &mut Page) {
        if let InputEvent::PointerMoved { position } = event {
            let style = page.style_mut(self.cursor);
            style.left = Some(Length::px(position.x - self.half));
            style.top = Some(Length::px(position.y - self.half));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mauseu_core::{Element, Point, Role, Size};

    fn cursor_page() -> (Page, ElementId) {
        let mut page = Page::new(Size::new(800.0, 600.0));
        let cursor = page.insert(Element::new("cursor", Role::Cursor)).unwrap();
        (page, cursor)
    }

    #[test]
    fn centers_the_disc_on_the_pointer() {
        let (mut page, cursor) = cursor_page();
        let mut follower = CursorFollower::new(cursor, 25.0);

        follower.handle(
            &InputEvent::PointerMoved {
                position: Point::new(100.0, 50.0),
            },
            &mut page,
        );

        let style = page.element(cursor).style;
        assert_eq!(style.left.unwrap().to_string(), "87.5px");
        assert_eq!(style.top.unwrap().to_string(), "37.5px");
    }

    #[test]
    fn repeated_moves_do_not_drift() {
        let (mut page, cursor) = cursor_page();
        let mut follower = CursorFollower::new(cursor, 25.0);
        let event = InputEvent::PointerMoved {
            position: Point::new(300.0, 200.0),
        };

        follower.handle(&event, &mut page);
        let first = page.element(cursor).style;
        follower.handle(&event, &mut page);
        assert_eq!(page.element(cursor).style, first);
    }

    #[test]
    fn ignores_everything_but_moves() {
        let (mut page, cursor) = cursor_page();
        let mut follower = CursorFollower::new(cursor, 25.0);

        follower.handle(&InputEvent::Scrolled { offset: 40.0 }, &mut page);
        assert!(page.element(cursor).style.left.is_none());
    }
}
