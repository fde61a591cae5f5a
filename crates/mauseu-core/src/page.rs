//! The page model: a flat arena of styled elements plus scroll state.

use std::collections::HashMap;

use thiserror::Error;

use crate::geometry::{Rect, Size};
use crate::style::ElementStyle;

/// Stable handle to an element in a [`Page`].
///
/// Handles are resolved once at setup time and held as non-owning
/// references for the page's lifetime; elements are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// What part an element plays on the page. Structural lookups, such as
/// collecting a nav's headings, filter on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The custom cursor indicator.
    Cursor,
    /// The pinned navigation bar.
    Nav,
    /// A navigation heading entry.
    Heading,
    /// The main hero section.
    Main,
    /// Any further document section.
    Section,
}

/// One element of the page.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    role: Role,
    parent: Option<ElementId>,
    pinned: bool,
    /// Layout box in page coordinates. Pinned elements keep their layout
    /// slot here and are drawn at the viewport top by the renderer.
    pub rect: Rect,
    pub style: ElementStyle,
    /// Display text, if the element carries any.
    pub text: String,
}

impl Element {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            parent: None,
            pinned: false,
            rect: Rect::default(),
            style: ElementStyle::default(),
            text: String::new(),
        }
    }

    pub fn child_of(mut self, parent: ElementId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Keep the element at the viewport top regardless of scroll.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

/// Errors from page construction and lookup. A failed lookup at bind time
/// is fatal for the whole interaction layer, never a per-event condition.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no element named `{0}` on the page")]
    MissingElement(String),
    #[error("an element named `{0}` already exists")]
    DuplicateName(String),
}

/// The page: element arena, name index, viewport, and scroll offset.
///
/// The page itself is the only scroll container; its offset is clamped to
/// the document height so tween math never sees an out-of-range scroll.
#[derive(Debug)]
pub struct Page {
    elements: Vec<Element>,
    by_name: HashMap<String, ElementId>,
    viewport: Size,
    scroll: f32,
    content_height: f32,
}

impl Page {
    pub fn new(viewport: Size) -> Self {
        Self {
            elements: Vec::new(),
            by_name: HashMap::new(),
            viewport,
            scroll: 0.0,
            content_height: 0.0,
        }
    }

    /// Add an element. Names are unique; a duplicate is a setup bug.
    pub fn insert(&mut self, element: Element) -> Result<ElementId, PageError> {
        if self.by_name.contains_key(&element.name) {
            return Err(PageError::DuplicateName(element.name.clone()));
        }
        let id = ElementId(self.elements.len());
        self.by_name.insert(element.name.clone(), id);
        self.elements.push(element);
        Ok(id)
    }

    /// Look up an element handle by name.
    pub fn resolve(&self, name: &str) -> Result<ElementId, PageError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| PageError::MissingElement(name.to_string()))
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Shorthand for handlers that only touch styles.
    pub fn style_mut(&mut self, id: ElementId) -> &mut ElementStyle {
        &mut self.elements[id.0].style
    }

    /// Children of `parent` with the given role, in insertion order.
    pub fn children_with_role(&self, parent: ElementId, role: Role) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.parent == Some(parent) && e.role == role)
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    /// All elements with their handles, in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter().enumerate().map(|(i, e)| (ElementId(i), e))
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Update the viewport (terminal resize). Scroll is re-clamped since
    /// the maximum offset depends on the viewport height.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.set_scroll(self.scroll);
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height.max(0.0);
        self.set_scroll(self.scroll);
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Largest valid scroll offset for the current document and viewport.
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport.height).max(0.0)
    }

    pub fn set_scroll(&mut self, offset: f32) {
        self.scroll = offset.clamp(0.0, self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.set_scroll(self.scroll + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn page() -> Page {
        Page::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn insert_and_resolve() {
        let mut page = page();
        let id = page.insert(Element::new("cursor", Role::Cursor)).unwrap();
        assert_eq!(page.resolve("cursor").unwrap(), id);
        assert_eq!(page.element(id).name(), "cursor");
    }

    #[test]
    fn missing_element_is_an_error() {
        let page = page();
        assert!(matches!(
            page.resolve("nav"),
            Err(PageError::MissingElement(name)) if name == "nav"
        ));
    }

    #[test]
    fn duplicate_name_is_an_error() {
        let mut page = page();
        page.insert(Element::new("nav", Role::Nav)).unwrap();
        assert!(matches!(
            page.insert(Element::new("nav", Role::Section)),
            Err(PageError::DuplicateName(_))
        ));
    }

    #[test]
    fn children_filter_on_parent_and_role() {
        let mut page = page();
        let nav = page.insert(Element::new("nav", Role::Nav)).unwrap();
        let work = page
            .insert(Element::new("nav-work", Role::Heading).child_of(nav))
            .unwrap();
        let news = page
            .insert(Element::new("nav-news", Role::Heading).child_of(nav))
            .unwrap();
        page.insert(Element::new("main", Role::Main)).unwrap();
        page.insert(Element::new("stray", Role::Heading)).unwrap();

        assert_eq!(page.children_with_role(nav, Role::Heading), vec![work, news]);
    }

    #[test]
    fn scroll_clamps_to_document() {
        let mut page = page();
        page.set_content_height(2000.0);
        assert_eq!(page.max_scroll(), 1400.0);

        page.scroll_by(-50.0);
        assert_eq!(page.scroll(), 0.0);

        page.set_scroll(5000.0);
        assert_eq!(page.scroll(), 1400.0);

        // Shrinking the document pulls the offset back in range
        page.set_content_height(800.0);
        assert_eq!(page.scroll(), 200.0);
    }

    #[test]
    fn short_documents_never_scroll() {
        let mut page = page();
        page.set_content_height(300.0);
        page.scroll_by(100.0);
        assert_eq!(page.scroll(), 0.0);
    }
}
