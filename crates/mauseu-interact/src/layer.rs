//! Binding: resolve elements once, subscribe handlers, submit tweens.

use mauseu_core::{Color, Dispatcher, ElementId, Length, Page, PageError, Role};
use mauseu_motion::{MotionEngine, MotionError, PositionParseError, ScrollTrigger, Tween};
use thiserror::Error;

use crate::follower::CursorFollower;
use crate::hover::HoverEmphasis;

/// Failures while wiring the layer to a page. All fatal; nothing is bound
/// partially on error in a way that needs undoing, because the caller
/// discards the dispatcher and engine along with the error.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("page error: {0}")]
    Page(#[from] PageError),
    #[error("trigger position error: {0}")]
    Position(#[from] PositionParseError),
    #[error("animation error: {0}")]
    Motion(#[from] MotionError),
}

/// Tunables for the bound behaviors. The defaults are the page's stylesheet
/// constants; the config file overrides individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BindOptions {
    /// Cursor disc diameter in pixels; the follower offsets by half of it.
    pub cursor_diameter: f32,
    /// Accent color of the resting cursor.
    pub accent: Color,
    /// Color the nav and main fade to while scrolling.
    pub fade: Color,
    /// Height in pixels the nav grows to.
    pub nav_height: f32,
    pub nav_start: String,
    pub nav_scrub: f32,
    pub main_start: String,
    pub main_end: String,
    pub main_scrub: f32,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            cursor_diameter: 25.0,
            accent: Color::rgb(0x95, 0xC1, 0x1E),
            fade: Color::BLACK,
            nav_height: 110.0,
            nav_start: "top -10%".to_string(),
            nav_scrub: 1.0,
            main_start: "top -50%".to_string(),
            main_end: "top -100%".to_string(),
            main_scrub: 2.0,
        }
    }
}

/// The bound interaction layer, holding the resolved element handles.
///
/// Construction does all the work: after `bind` returns, the dispatcher
/// carries the pointer handlers and the engine carries both scroll tweens.
/// The handles stay available so the event source can register hit areas
/// for the headings.
#[derive(Debug)]
pub struct InteractionLayer {
    cursor: ElementId,
    nav: ElementId,
    main: ElementId,
    headings: Vec<ElementId>,
}

impl InteractionLayer {
    /// Resolve the named elements, subscribe the pointer handlers, and
    /// register the two scroll tweens.
    ///
    /// A missing `cursor`, `nav`, or `main` element is an error; a nav
    /// without headings binds no hover handlers and is fine.
    pub fn bind(
        page: &Page,
        dispatcher: &mut Dispatcher,
        engine: &mut MotionEngine,
        options: &BindOptions,
    ) -> Result<Self, BindError> {
        let cursor = page.resolve("cursor")?;
        let nav = page.resolve("nav")?;
        let main = page.resolve("main")?;
        let headings = page.children_with_role(nav, Role::Heading);

        dispatcher.subscribe(Box::new(CursorFollower::new(
            cursor,
            options.cursor_diameter,
        )));
        for &heading in &headings {
            dispatcher.subscribe(Box::new(HoverEmphasis::new(cursor, heading, options.accent)));
        }

        engine.register(
            Tween::new("nav")
                .background(options.fade)
                .height(Length::px(options.nav_height))
                .duration(0.5)
                .scroll_trigger(
                    ScrollTrigger::new("nav")
                        .scroller("body")
                        .start(options.nav_start.parse()?)
                        .scrub(options.nav_scrub),
                ),
            page,
        )?;
        engine.register(
            Tween::new("main").background(options.fade).scroll_trigger(
                ScrollTrigger::new("main")
                    .start(options.main_start.parse()?)
                    .end(options.main_end.parse()?)
                    .scrub(options.main_scrub),
            ),
            page,
        )?;

        Ok(Self {
            cursor,
            nav,
            main,
            headings,
        })
    }

    pub fn cursor(&self) -> ElementId {
        self.cursor
    }

    pub fn nav(&self) -> ElementId {
        self.nav
    }

    pub fn main(&self) -> ElementId {
        self.main
    }

    /// Headings the hover handlers watch, for hit-area registration.
    pub fn headings(&self) -> &[ElementId] {
        &self.headings
    }
}
