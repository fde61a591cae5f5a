//! The engine proper: registered tweens evaluated once per frame.

use mauseu_core::{Color, Element, ElementId, Length, Page, Rect};
use thiserror::Error;

use crate::ease::Easing;
use crate::position::TriggerPosition;
use crate::tween::{PropertyTargets, Tween};

/// Name accepted as an alias for the page root scroll container.
const PAGE_ROOT: &str = "body";

/// Registration failures. All are setup errors; a registered tween can no
/// longer fail.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("unknown animation target `{0}`")]
    UnknownTarget(String),
    #[error("unknown trigger element `{0}`")]
    UnknownTrigger(String),
    #[error("unknown scroller `{0}`; only the page root scrolls")]
    UnknownScroller(String),
}

/// Debug readout of one scroll-triggered tween, rendered as on-page markers.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerMarker {
    /// Name of the tween's target element.
    pub target: String,
    /// Scroll offset where progress reaches 0.
    pub start: f32,
    /// Scroll offset where progress reaches 1.
    pub end: f32,
    /// Displayed (scrub-smoothed) progress.
    pub progress: f32,
}

/// Starting values captured from the target element at registration.
#[derive(Debug, Clone, Copy, Default)]
struct PropertyFrom {
    background: Option<Color>,
    height: Option<Length>,
    left: Option<Length>,
    top: Option<Length>,
    scale: Option<f32>,
}

/// Scroll trigger with its element resolved and defaults filled in.
#[derive(Debug, Clone, Copy)]
struct ResolvedTrigger {
    trigger: ElementId,
    start: TriggerPosition,
    end: TriggerPosition,
    scrub: f32,
}

impl ResolvedTrigger {
    /// Progress the scroll position asks for, recomputed from layout every
    /// frame. A degenerate range (end at or before start) is a step.
    fn target_progress(&self, trigger_rect: &Rect, viewport_height: f32, scroll: f32) -> f32 {
        let start = self.start.threshold(trigger_rect, viewport_height);
        let end = self.end.threshold(trigger_rect, viewport_height);
        if end <= start {
            if scroll < start { 0.0 } else { 1.0 }
        } else {
            ((scroll - start) / (end - start)).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug)]
struct ActiveTween {
    target: ElementId,
    target_name: String,
    from: PropertyFrom,
    to: PropertyTargets,
    duration: f32,
    ease: Easing,
    trigger: Option<ResolvedTrigger>,
    /// Displayed progress; lags the scroll target under scrubbing.
    progress: f32,
    /// Playback clock for duration-driven tweens.
    elapsed: f32,
}

impl ActiveTween {
    /// Write the interpolated property values into the target's style.
    fn apply(&self, page: &mut Page, progress: f32) {
        let style = page.style_mut(self.target);
        if let (Some(from), Some(to)) = (self.from.background, self.to.background) {
            style.background = Some(from.lerp(to, progress));
        }
        if let (Some(from), Some(to)) = (self.from.height, self.to.height) {
            style.height = Some(from.lerp(to, progress));
        }
        if let (Some(from), Some(to)) = (self.from.left, self.to.left) {
            style.left = Some(from.lerp(to, progress));
        }
        if let (Some(from), Some(to)) = (self.from.top, self.to.top) {
            style.top = Some(from.lerp(to, progress));
        }
        if let (Some(from), Some(to)) = (self.from.scale, self.to.scale) {
            style.scale = lerp(from, to, progress);
        }
    }
}

/// Evaluates registered tweens against the page once per frame.
///
/// Scrubbed tweens read the scroll offset and trigger layout fresh on every
/// call, so resizes and layout changes need no invalidation step.
#[derive(Debug, Default)]
pub struct MotionEngine {
    tweens: Vec<ActiveTween>,
}

impl MotionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tween, resolving its names against the page and capturing
    /// the starting property values from the target element.
    pub fn register(&mut self, tween: Tween, page: &Page) -> Result<(), MotionError> {
        let target = page
            .resolve(&tween.target)
            .map_err(|_| MotionError::UnknownTarget(tween.target.clone()))?;

        let trigger = match &tween.scroll_trigger {
            Some(config) => {
                if let Some(name) = &config.scroller {
                    if name != PAGE_ROOT {
                        return Err(MotionError::UnknownScroller(name.clone()));
                    }
                }
                let trigger = page
                    .resolve(&config.trigger)
                    .map_err(|_| MotionError::UnknownTrigger(config.trigger.clone()))?;
                Some(ResolvedTrigger {
                    trigger,
                    start: config.start.unwrap_or(TriggerPosition::DEFAULT_START),
                    end: config.end.unwrap_or(TriggerPosition::DEFAULT_END),
                    scrub: config.scrub,
                })
            }
            None => None,
        };

        let from = capture(page.element(target), &tween.to);
        self.tweens.push(ActiveTween {
            target,
            target_name: tween.target,
            from,
            to: tween.to,
            duration: tween.duration,
            ease: tween.ease,
            trigger,
            progress: 0.0,
            elapsed: 0.0,
        });
        Ok(())
    }

    /// Advance every tween by `dt` seconds and apply the results.
    ///
    /// Scrubbed progress stays linear in scroll; easing shapes only
    /// duration-driven playback.
    pub fn advance(&mut self, page: &mut Page, dt: f32) {
        let viewport_height = page.viewport().height;
        let scroll = page.scroll();

        for tween in &mut self.tweens {
            let shaped = match &tween.trigger {
                Some(trigger) => {
                    let rect = page.element(trigger.trigger).rect;
                    let target = trigger.target_progress(&rect, viewport_height, scroll);
                    tween.progress = scrub_toward(tween.progress, target, trigger.scrub, dt);
                    tween.progress
                }
                None => {
                    tween.elapsed += dt;
                    tween.progress = if tween.duration <= 0.0 {
                        1.0
                    } else {
                        (tween.elapsed / tween.duration).min(1.0)
                    };
                    tween.ease.apply(tween.progress)
                }
            };
            tween.apply(page, shaped);
        }
    }

    /// Current thresholds and progress of the scroll-triggered tweens, for
    /// the marker overlay. Allocates; call only while markers are shown.
    pub fn markers(&self, page: &Page) -> Vec<TriggerMarker> {
        let viewport_height = page.viewport().height;
        self.tweens
            .iter()
            .filter_map(|tween| {
                let trigger = tween.trigger.as_ref()?;
                let rect = page.element(trigger.trigger).rect;
                Some(TriggerMarker {
                    target: tween.target_name.clone(),
                    start: trigger.start.threshold(&rect, viewport_height),
                    end: trigger.end.threshold(&rect, viewport_height),
                    progress: tween.progress,
                })
            })
            .collect()
    }

    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }
}

/// Capture the current value of every property the tween will move.
///
/// Style overrides win over layout geometry, so re-registering against a
/// half-animated element picks up where the style left off.
fn capture(element: &Element, to: &PropertyTargets) -> PropertyFrom {
    let style = &element.style;
    PropertyFrom {
        background: to
            .background
            .map(|_| style.background.unwrap_or(Color::TRANSPARENT)),
        height: to
            .height
            .map(|_| style.height.unwrap_or(Length::px(element.rect.height))),
        left: to
            .left
            .map(|_| style.left.unwrap_or(Length::px(element.rect.x))),
        top: to
            .top
            .map(|_| style.top.unwrap_or(Length::px(element.rect.y))),
        scale: to.scale.map(|_| style.scale),
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

fn scrub_toward(current: f32, target: f32, scrub: f32, dt: f32) -> f32 {
    if scrub <= 0.0 {
        return target;
    }
    current + (target - current) * (dt / scrub).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::ScrollTrigger;
    use mauseu_core::{ElementStyle, Role, Size};

    const CREAM: Color = Color::rgb(239, 234, 227);

    fn demo_page() -> Page {
        let mut page = Page::new(Size::new(800.0, 600.0));
        page.set_content_height(1800.0);
        let painted = ElementStyle {
            background: Some(CREAM),
            ..ElementStyle::default()
        };
        page.insert(
            Element::new("nav", Role::Nav)
                .with_rect(Rect::new(0.0, 0.0, 800.0, 80.0))
                .with_style(painted),
        )
        .unwrap();
        page.insert(
            Element::new("main", Role::Main)
                .with_rect(Rect::new(0.0, 80.0, 800.0, 900.0))
                .with_style(painted),
        )
        .unwrap();
        page
    }

    fn nav_tween(scrub: f32) -> Tween {
        Tween::new("nav")
            .background(Color::BLACK)
            .height(Length::px(110.0))
            .scroll_trigger(
                ScrollTrigger::new("nav")
                    .scroller("body")
                    .start("top -10%".parse().unwrap())
                    .scrub(scrub),
            )
    }

    #[test]
    fn scrub_zero_snaps_to_the_scroll_position() {
        let mut page = demo_page();
        let mut engine = MotionEngine::new();
        engine.register(nav_tween(0.0), &page).unwrap();

        // Start "top -10%" is 60; default end "bottom top" is 80. Halfway.
        page.set_scroll(70.0);
        engine.advance(&mut page, 0.016);

        let style = page.element(page.resolve("nav").unwrap()).style;
        assert_eq!(style.height, Some(Length::px(95.0)));
        assert_eq!(style.background, Some(Color::rgb(120, 117, 114)));
    }

    #[test]
    fn scrub_smooths_toward_the_target() {
        let mut page = demo_page();
        let mut engine = MotionEngine::new();
        engine.register(nav_tween(1.0), &page).unwrap();

        page.set_scroll(200.0);
        engine.advance(&mut page, 0.25);
        assert!((engine.markers(&page)[0].progress - 0.25).abs() < 1e-6);

        engine.advance(&mut page, 0.25);
        assert!((engine.markers(&page)[0].progress - 0.4375).abs() < 1e-6);

        for _ in 0..50 {
            engine.advance(&mut page, 0.25);
        }
        let progress = engine.markers(&page)[0].progress;
        assert!(progress > 0.99 && progress <= 1.0);
    }

    #[test]
    fn degenerate_range_behaves_as_a_step() {
        let mut page = demo_page();
        let mut engine = MotionEngine::new();
        // End threshold (-600) sits before start (80).
        let tween = Tween::new("nav").height(Length::px(110.0)).scroll_trigger(
            ScrollTrigger::new("nav")
                .start("bottom top".parse().unwrap())
                .end("top bottom".parse().unwrap()),
        );
        engine.register(tween, &page).unwrap();

        page.set_scroll(79.0);
        engine.advance(&mut page, 0.016);
        let nav = page.resolve("nav").unwrap();
        assert_eq!(page.element(nav).style.height, Some(Length::px(80.0)));

        page.set_scroll(80.0);
        engine.advance(&mut page, 0.016);
        assert_eq!(page.element(nav).style.height, Some(Length::px(110.0)));
    }

    #[test]
    fn timed_tween_eases_to_completion() {
        let mut page = demo_page();
        let mut engine = MotionEngine::new();
        engine
            .register(Tween::new("nav").height(Length::px(110.0)), &page)
            .unwrap();

        // Halfway through the default 0.5 s, power-out has covered 75%.
        engine.advance(&mut page, 0.25);
        let nav = page.resolve("nav").unwrap();
        assert_eq!(page.element(nav).style.height, Some(Length::px(102.5)));

        engine.advance(&mut page, 0.5);
        assert_eq!(page.element(nav).style.height, Some(Length::px(110.0)));

        // Finished tweens hold their end values.
        engine.advance(&mut page, 1.0);
        assert_eq!(page.element(nav).style.height, Some(Length::px(110.0)));
    }

    #[test]
    fn unknown_names_fail_registration() {
        let page = demo_page();
        let mut engine = MotionEngine::new();

        let err = engine
            .register(Tween::new("ghost").background(Color::BLACK), &page)
            .unwrap_err();
        assert!(matches!(err, MotionError::UnknownTarget(name) if name == "ghost"));

        let err = engine
            .register(
                Tween::new("nav").scroll_trigger(ScrollTrigger::new("ghost")),
                &page,
            )
            .unwrap_err();
        assert!(matches!(err, MotionError::UnknownTrigger(name) if name == "ghost"));

        let err = engine
            .register(
                Tween::new("nav").scroll_trigger(ScrollTrigger::new("nav").scroller("sidebar")),
                &page,
            )
            .unwrap_err();
        assert!(matches!(err, MotionError::UnknownScroller(name) if name == "sidebar"));
    }

    #[test]
    fn markers_expose_current_thresholds() {
        let mut page = demo_page();
        let mut engine = MotionEngine::new();
        engine.register(nav_tween(1.0), &page).unwrap();
        engine
            .register(Tween::new("main").background(Color::BLACK), &page)
            .unwrap();

        let markers = engine.markers(&page);
        assert_eq!(markers.len(), 1, "timed tweens draw no markers");
        assert_eq!(markers[0].target, "nav");
        assert_eq!(markers[0].start, 60.0);
        assert_eq!(markers[0].end, 80.0);

        page.set_scroll(70.0);
        engine.advance(&mut page, 10.0);
        assert!((engine.markers(&page)[0].progress - 0.5).abs() < 1e-6);
    }
}
