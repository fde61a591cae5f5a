use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use mauseu_config::Config;
use mauseu_core::{Dispatcher, HitRegistry, InputEvent, Page, Point};
use mauseu_interact::{BindOptions, InteractionLayer};
use mauseu_motion::MotionEngine;
use ratatui::{
    layout::{Constraint, Layout},
    DefaultTerminal, Frame,
};

use crate::site::SiteMap;

mod render;
mod site;

/// Page pixels one wheel notch or arrow key moves the page.
const SCROLL_STEP: f32 = 48.0;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load_or_default()?;
    let terminal = ratatui::init();
    let result = run(&config, terminal);
    ratatui::restore();
    result
}

fn run(config: &Config, terminal: DefaultTerminal) -> color_eyre::Result<()> {
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = App::new(config).and_then(|app| app.run(terminal));
    let _ = execute!(io::stdout(), DisableMouseCapture);
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Whether the scroll-trigger readout is overlaid on the page.
    show_markers: bool,
    page: Page,
    site: SiteMap,
    dispatcher: Dispatcher,
    engine: MotionEngine,
    hits: HitRegistry,
    layer: InteractionLayer,
    title_art: Vec<String>,
    cursor_diameter: f32,
    last_frame: Instant,
}

impl App {
    /// Construct the page, wire the pointer handlers, and register the
    /// scroll tweens.
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        // The viewport gets its real size once the terminal is known;
        // 80x23 cells is only a seed.
        let (page, site) = site::build_page(render::viewport_px(80, 23), config)?;

        let mut dispatcher = Dispatcher::new();
        let mut engine = MotionEngine::new();
        let options = BindOptions {
            cursor_diameter: config.cursor_diameter,
            accent: config.accent,
            fade: config.fade,
            nav_height: config.nav_height,
            nav_start: config.nav_start.clone(),
            nav_scrub: config.nav_scrub,
            main_start: config.main_start.clone(),
            main_end: config.main_end.clone(),
            main_scrub: config.main_scrub,
        };
        let layer = InteractionLayer::bind(&page, &mut dispatcher, &mut engine, &options)?;
        let title_art = mauseu_fonts::build_title_art(&config.hero_title);

        Ok(Self {
            running: false,
            show_markers: false,
            page,
            site,
            dispatcher,
            engine,
            hits: HitRegistry::new(),
            layer,
            title_art,
            cursor_diameter: config.cursor_diameter,
            last_frame: Instant::now(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.resize(size.width, size.height);
        self.last_frame = Instant::now();
        while self.running {
            self.step();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Advance one frame: relayout, run the tweens, refresh hover targets.
    fn step(&mut self) {
        let dt = self.last_frame.elapsed().as_secs_f32();
        self.last_frame = Instant::now();

        site::layout(&mut self.page, &self.site);
        self.engine.advance(&mut self.page, dt);
        self.refresh_hit_areas();
    }

    /// Headings ride the pinned nav, so their hit boxes track the scroll
    /// offset in page space.
    fn refresh_hit_areas(&mut self) {
        self.hits.clear();
        let scroll = self.page.scroll();
        for &heading in self.layer.headings() {
            let mut rect = self.page.element(heading).rect;
            rect.y += scroll;
            self.hits.register(rect, heading);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());

        render::draw_page(frame, chunks[0], &self.page, &self.site, &self.title_art);
        render::draw_cursor(
            frame,
            chunks[0],
            &self.page,
            self.site.cursor,
            self.cursor_diameter,
        );
        if self.show_markers {
            let markers = self.engine.markers(&self.page);
            render::draw_markers(frame, chunks[0], &self.page, &markers);
        }
        render::draw_help(frame, chunks[1], self.show_markers);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        // ~60 fps; the timeout keeps tweens moving when input is idle.
        if !event::poll(Duration::from_millis(16))? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::Resize(columns, rows) => self.resize(columns, rows),
            _ => {}
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.show_markers = !self.show_markers,
            (_, KeyCode::Up) => self.scroll_by(-SCROLL_STEP),
            (_, KeyCode::Down) => self.scroll_by(SCROLL_STEP),
            (_, KeyCode::PageUp) => self.scroll_by(-self.page_step()),
            (_, KeyCode::PageDown) => self.scroll_by(self.page_step()),
            (_, KeyCode::Home | KeyCode::Char('g')) => self.scroll_to(0.0),
            (_, KeyCode::End | KeyCode::Char('G')) => self.scroll_to(f32::MAX),
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer_moved(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollUp => self.scroll_by(-SCROLL_STEP),
            MouseEventKind::ScrollDown => self.scroll_by(SCROLL_STEP),
            _ => {}
        }
    }

    /// Publish a pointer move in page pixels, then any hover change it
    /// caused. Leave always goes out before enter.
    fn pointer_moved(&mut self, column: u16, row: u16) {
        let position = Point::new(
            (column as f32 + 0.5) * render::PX_PER_COL,
            (row as f32 + 0.5) * render::PX_PER_ROW + self.page.scroll(),
        );
        self.dispatcher
            .publish(&InputEvent::PointerMoved { position }, &mut self.page);

        let change = self.hits.update(position);
        if let Some(element) = change.left {
            self.dispatcher
                .publish(&InputEvent::PointerLeft { element }, &mut self.page);
        }
        if let Some(element) = change.entered {
            self.dispatcher
                .publish(&InputEvent::PointerEntered { element }, &mut self.page);
        }
    }

    fn scroll_by(&mut self, delta: f32) {
        self.page.scroll_by(delta);
        self.publish_scroll();
    }

    fn scroll_to(&mut self, offset: f32) {
        self.page.set_scroll(offset);
        self.publish_scroll();
    }

    fn publish_scroll(&mut self) {
        let offset = self.page.scroll();
        self.dispatcher
            .publish(&InputEvent::Scrolled { offset }, &mut self.page);
    }

    /// Resize the page viewport, keeping the bottom row for the key help.
    fn resize(&mut self, columns: u16, rows: u16) {
        self.page
            .set_viewport(render::viewport_px(columns, rows.saturating_sub(1)));
    }

    fn page_step(&self) -> f32 {
        self.page.viewport().height * 0.9
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
