//! Swaps the cursor between two looks when the pointer crosses a heading.

use mauseu_core::{Border, Color, ElementId, ElementStyle, Handler, InputEvent, Length, Page};

/// One of the two looks the shared cursor indicator takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorLook {
    pub scale: f32,
    pub border: Border,
    pub background: Color,
}

impl CursorLook {
    /// Enlarged hollow outline shown while the pointer is over a heading.
    pub fn emphasis() -> Self {
        Self {
            scale: 3.0,
            border: Border::new(Length::px(0.5), Color::WHITE),
            background: Color::TRANSPARENT,
        }
    }

    /// The filled accent dot the cursor rests as.
    pub fn rest(accent: Color) -> Self {
        Self {
            scale: 1.0,
            border: Border::new(Length::px(0.0), accent),
            background: accent,
        }
    }

    fn apply(&self, style: &mut ElementStyle) {
        style.scale = self.scale;
        style.border = Some(self.border);
        style.background = Some(self.background);
    }
}

/// Hover handler for one heading, mutating the shared cursor element.
///
/// Each heading gets its own subscription; the handlers carry no state, so
/// overlapping enters and leaves simply resolve to whichever fired last.
#[derive(Debug)]
pub struct HoverEmphasis {
    cursor: ElementId,
    heading: ElementId,
    emphasis: CursorLook,
    rest: CursorLook,
}

impl HoverEmphasis {
    pub fn new(cursor: ElementId, heading: ElementId, accent: Color) -> Self {
        Self {
            cursor,
            heading,
            emphasis: CursorLook::emphasis(),
            rest: CursorLook::rest(accent),
        }
    }
}

impl Handler for HoverEmphasis {
    fn handle(&mut self, event: &InputEvent, page: &mut Page) {
        match event {
            InputEvent::PointerEntered { element } if *element == self.heading => {
                self.emphasis.apply(page.style_mut(self.cursor));
            }
            InputEvent::PointerLeft { element } if *element == self.heading => {
                self.rest.apply(page.style_mut(self.cursor));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mauseu_core::{Element, Role, Size};

    const ACCENT: Color = Color::rgb(0x95, 0xC1, 0x1E);

    fn hover_page() -> (Page, HoverEmphasis, ElementId) {
        let mut page = Page::new(Size::new(800.0, 600.0));
        let cursor = page.insert(Element::new("cursor", Role::Cursor)).unwrap();
        let nav = page.insert(Element::new("nav", Role::Nav)).unwrap();
        let heading = page
            .insert(Element::new("work", Role::Heading).child_of(nav))
            .unwrap();
        let handler = HoverEmphasis::new(cursor, heading, ACCENT);
        (page, handler, cursor)
    }

    #[test]
    fn enter_applies_the_emphasis_look() {
        let (mut page, mut handler, cursor) = hover_page();
        let heading = page.resolve("work").unwrap();

        handler.handle(&InputEvent::PointerEntered { element: heading }, &mut page);

        let style = page.element(cursor).style;
        assert_eq!(style.scale, 3.0);
        assert_eq!(style.border.unwrap().to_string(), "0.5px solid white");
        assert_eq!(style.background, Some(Color::TRANSPARENT));
    }

    #[test]
    fn leave_restores_the_rest_look() {
        let (mut page, mut handler, cursor) = hover_page();
        let heading = page.resolve("work").unwrap();

        handler.handle(&InputEvent::PointerEntered { element: heading }, &mut page);
        handler.handle(&InputEvent::PointerLeft { element: heading }, &mut page);

        let style = page.element(cursor).style;
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.border.unwrap().to_string(), "0px solid #95C11E");
        assert_eq!(style.background, Some(ACCENT));
    }

    #[test]
    fn one_leave_outweighs_any_number_of_enters() {
        let (mut page, mut handler, cursor) = hover_page();
        let heading = page.resolve("work").unwrap();

        for _ in 0..5 {
            handler.handle(&InputEvent::PointerEntered { element: heading }, &mut page);
        }
        handler.handle(&InputEvent::PointerLeft { element: heading }, &mut page);

        assert_eq!(page.element(cursor).style.scale, 1.0);
    }

    #[test]
    fn other_elements_do_not_touch_the_cursor() {
        let (mut page, mut handler, cursor) = hover_page();
        let nav = page.resolve("nav").unwrap();

        handler.handle(&InputEvent::PointerEntered { element: nav }, &mut page);

        assert_eq!(page.element(cursor).style.scale, 1.0);
        assert!(page.element(cursor).style.border.is_none());
    }
}
