//! The demo page: a pinned nav bar, a hero, and enough below it to scroll.
//!
//! Everything is measured in page pixels. The nav keeps a layout slot at the
//! top of the document; when a tween grows its height, the flow below it
//! shifts down on the next layout pass.

use mauseu_config::Config;
use mauseu_core::{
    Border, Color, Element, ElementId, ElementStyle, Length, Page, PageError, Rect, Role, Size,
};

/// Background the page shows where no element paints over it.
pub const PAGE_BG: Color = Color::rgb(239, 234, 227);

/// Intrinsic nav bar height before any animation.
pub const NAV_HEIGHT: f32 = 80.0;

/// Horizontal slot reserved for each nav heading.
const HEADING_SLOT: f32 = 96.0;
const HEADING_HEIGHT: f32 = 32.0;

/// Sections below the hero: name, display text, height as a viewport share.
const SECTIONS: [(&str, &str, f32); 3] = [
    ("gallery", "SELECTED WORK", 0.9),
    ("about", "ABOUT THE STUDIO", 0.9),
    ("footer", "SAY HELLO", 0.4),
];

/// Handles to the demo page's elements, resolved once at build time.
#[derive(Debug)]
pub struct SiteMap {
    pub cursor: ElementId,
    pub nav: ElementId,
    pub headings: Vec<ElementId>,
    pub main: ElementId,
    pub sections: Vec<ElementId>,
}

/// Build the demo page for a viewport and lay it out once.
pub fn build_page(viewport: Size, config: &Config) -> Result<(Page, SiteMap), PageError> {
    let mut page = Page::new(viewport);

    // The cursor starts in its resting look; pointer events move it.
    let resting = ElementStyle {
        background: Some(config.accent),
        border: Some(Border::new(Length::px(0.0), config.accent)),
        ..ElementStyle::default()
    };
    let cursor = page.insert(Element::new("cursor", Role::Cursor).with_style(resting))?;

    let painted = ElementStyle {
        background: Some(PAGE_BG),
        ..ElementStyle::default()
    };
    let nav = page.insert(
        Element::new("nav", Role::Nav)
            .with_style(painted)
            .with_text(config.hero_title.clone())
            .pinned(),
    )?;

    let mut headings = Vec::with_capacity(config.headings.len());
    for label in &config.headings {
        let name = format!("nav-{}", label.to_lowercase());
        let heading = page.insert(
            Element::new(name, Role::Heading)
                .child_of(nav)
                .with_text(label.clone()),
        )?;
        headings.push(heading);
    }

    let main = page.insert(
        Element::new("main", Role::Main)
            .with_style(painted)
            .with_text("AN INTERACTIVE STUDIO"),
    )?;

    let mut sections = Vec::with_capacity(SECTIONS.len());
    for (name, text, _) in SECTIONS {
        let section = page.insert(
            Element::new(name, Role::Section)
                .with_style(painted)
                .with_text(text),
        )?;
        sections.push(section);
    }

    let site = SiteMap {
        cursor,
        nav,
        headings,
        main,
        sections,
    };
    layout(&mut page, &site);
    Ok((page, site))
}

/// Lay the page out for the current viewport and animated heights.
///
/// Runs every frame; rects are cheap to recompute and the scroll tweens
/// re-read them anyway.
pub fn layout(page: &mut Page, site: &SiteMap) {
    let viewport = page.viewport();
    let width = viewport.width;

    page.element_mut(site.nav).rect = Rect::new(0.0, 0.0, width, NAV_HEIGHT);

    // Headings sit right-aligned, vertically centered in the nav slot.
    let row_width = HEADING_SLOT * site.headings.len() as f32;
    let mut x = (width - row_width).max(0.0);
    for &heading in &site.headings {
        page.element_mut(heading).rect = Rect::new(
            x,
            (NAV_HEIGHT - HEADING_HEIGHT) / 2.0,
            HEADING_SLOT,
            HEADING_HEIGHT,
        );
        x += HEADING_SLOT;
    }

    let mut y = effective_height(page, site.nav);

    page.element_mut(site.main).rect = Rect::new(0.0, y, width, viewport.height);
    y += effective_height(page, site.main);

    for (&section, (_, _, share)) in site.sections.iter().zip(SECTIONS) {
        page.element_mut(section).rect = Rect::new(0.0, y, width, viewport.height * share);
        y += effective_height(page, section);
    }

    page.set_content_height(y);
}

/// Height an element takes up in flow: the animated override if a tween set
/// one, the layout height otherwise.
fn effective_height(page: &Page, id: ElementId) -> f32 {
    let element = page.element(id);
    element
        .style
        .height
        .map(Length::value)
        .unwrap_or(element.rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> (Page, SiteMap) {
        build_page(Size::new(800.0, 600.0), &Config::default()).unwrap()
    }

    #[test]
    fn named_elements_resolve() {
        let (page, site) = demo();
        assert_eq!(page.resolve("cursor").unwrap(), site.cursor);
        assert_eq!(page.resolve("nav").unwrap(), site.nav);
        assert_eq!(page.resolve("main").unwrap(), site.main);
        assert_eq!(site.headings.len(), 4);
        assert_eq!(page.element(site.headings[0]).text, "WORK");
    }

    #[test]
    fn flow_stacks_below_the_nav() {
        let (page, site) = demo();
        assert_eq!(page.element(site.main).rect.top(), NAV_HEIGHT);
        // nav + hero + two tall sections + footer
        let expected = NAV_HEIGHT + 600.0 + 540.0 + 540.0 + 240.0;
        assert_eq!(page.content_height(), expected);
        assert!(page.max_scroll() > 0.0);
    }

    #[test]
    fn animated_nav_height_shifts_the_flow() {
        let (mut page, site) = demo();
        page.style_mut(site.nav).height = Some(Length::px(110.0));
        layout(&mut page, &site);

        assert_eq!(page.element(site.main).rect.top(), 110.0);
        // The layout slot itself stays put, so trigger math is stable.
        assert_eq!(page.element(site.nav).rect.height, NAV_HEIGHT);
    }

    #[test]
    fn headings_line_up_against_the_right_edge() {
        let (page, site) = demo();
        let last = page.element(*site.headings.last().unwrap()).rect;
        assert_eq!(last.x + last.width, 800.0);
        let first = page.element(site.headings[0]).rect;
        assert_eq!(first.x, 800.0 - 4.0 * HEADING_SLOT);
    }
}
