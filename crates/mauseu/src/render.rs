//! Drawing the page, the cursor, and the marker readout into the terminal.
//!
//! Terminal cells are coarse, so the renderer treats each one as an 8x16
//! patch of page pixels and samples elements at cell centers.

use mauseu_core::{Color, Element, ElementId, Length, Page, Size};
use mauseu_motion::TriggerMarker;
use ratatui::{
    layout::{Position, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::site::{self, SiteMap};

/// Page pixels covered by one terminal column.
pub const PX_PER_COL: f32 = 8.0;
/// Page pixels covered by one terminal row.
pub const PX_PER_ROW: f32 = 16.0;

/// Page-pixel size of a terminal area.
pub fn viewport_px(columns: u16, rows: u16) -> Size {
    Size::new(columns as f32 * PX_PER_COL, rows as f32 * PX_PER_ROW)
}

/// Paint the nav band and the scrolled document below it.
pub fn draw_page(frame: &mut Frame, area: Rect, page: &Page, site: &SiteMap, title_art: &[String]) {
    let width = area.width as usize;
    let scroll = page.scroll();

    // A pinned nav owns the top band of every frame; the document scrolls
    // beneath it.
    let nav = page.element(site.nav);
    let nav_band = if nav.is_pinned() {
        element_height(nav)
    } else {
        0.0
    };

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let viewport_y = (row as f32 + 0.5) * PX_PER_ROW;
        if viewport_y < nav_band {
            lines.push(nav_line(page, site, viewport_y, width));
        } else {
            lines.push(content_line(page, site, scroll + viewport_y, width, title_art));
        }
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn nav_line(page: &Page, site: &SiteMap, viewport_y: f32, width: usize) -> Line<'static> {
    let nav = page.element(site.nav);
    let background = effective_bg(nav.style.background);
    let style = row_style(background);

    let label_center = site
        .headings
        .first()
        .map(|&heading| {
            let rect = page.element(heading).rect;
            (rect.top() + rect.bottom()) / 2.0
        })
        .unwrap_or(site::NAV_HEIGHT / 2.0);
    let offset = label_center - viewport_y;
    if offset <= -PX_PER_ROW / 2.0 || offset > PX_PER_ROW / 2.0 {
        return Line::from(" ".repeat(width)).style(style);
    }

    let brand = format!(" {}", nav.text);
    let labels: Vec<String> = site
        .headings
        .iter()
        .map(|&heading| {
            let element = page.element(heading);
            let slot = (element.rect.width / PX_PER_COL) as usize;
            format!("{:^slot$}", element.text)
        })
        .collect();
    let label_width: usize = labels.iter().map(|label| label.chars().count()).sum();
    let filler = width.saturating_sub(brand.chars().count() + label_width);

    let mut spans = vec![brand.bold(), " ".repeat(filler).into()];
    for label in labels {
        spans.push(label.bold());
    }
    Line::from(spans).style(style)
}

fn content_line(
    page: &Page,
    site: &SiteMap,
    page_y: f32,
    width: usize,
    title_art: &[String],
) -> Line<'static> {
    let main = page.element(site.main);
    if covers(main, page_y) {
        return hero_line(main, page_y, width, title_art);
    }
    for &section in &site.sections {
        let element = page.element(section);
        if covers(element, page_y) {
            return section_line(element, page_y, width);
        }
    }
    Line::from(" ".repeat(width)).style(row_style(site::PAGE_BG))
}

fn hero_line(element: &Element, page_y: f32, width: usize, title_art: &[String]) -> Line<'static> {
    let style = row_style(effective_bg(element.style.background));
    let height = element_height(element);
    let art_top = element.rect.top() + (height - title_art.len() as f32 * PX_PER_ROW) / 2.0;
    let index = ((page_y - art_top) / PX_PER_ROW).floor() as i32;

    if index >= 0 && (index as usize) < title_art.len() {
        return Line::from(centered(&title_art[index as usize], width)).style(style);
    }
    // Tagline one blank row under the block letters.
    if index == title_art.len() as i32 + 1 {
        return Line::from(centered(&element.text, width)).style(style);
    }
    Line::from(" ".repeat(width)).style(style)
}

fn section_line(element: &Element, page_y: f32, width: usize) -> Line<'static> {
    let style = row_style(effective_bg(element.style.background));
    let center = element.rect.top() + element_height(element) / 2.0;
    let offset = center - page_y;
    if offset > -PX_PER_ROW / 2.0 && offset <= PX_PER_ROW / 2.0 {
        return Line::from(centered(&element.text, width)).style(style);
    }
    Line::from(" ".repeat(width)).style(style)
}

/// Overlay the cursor disc on top of the rendered page.
///
/// A filled background paints cell backgrounds inside the radius; a
/// transparent background with a visible border paints a ring instead.
pub fn draw_cursor(frame: &mut Frame, area: Rect, page: &Page, cursor: ElementId, diameter: f32) {
    let style = &page.element(cursor).style;
    let (Some(left), Some(top)) = (style.left, style.top) else {
        return;
    };

    let radius = diameter / 2.0 * style.scale.max(0.0);
    let center_x = left.value() + diameter / 2.0;
    let center_y = top.value() + diameter / 2.0 - page.scroll();

    let fill = style
        .background
        .filter(|color| !color.is_transparent())
        .and_then(|color| color.to_ratatui());
    let ring = style
        .border
        .filter(|border| border.width.value() > 0.0)
        .and_then(|border| border.color.to_ratatui());

    let min_col = ((center_x - radius) / PX_PER_COL - 1.0).max(0.0) as u16;
    let max_col = (((center_x + radius) / PX_PER_COL) + 1.0).min(area.width as f32) as u16;
    let min_row = ((center_y - radius) / PX_PER_ROW - 1.0).max(0.0) as u16;
    let max_row = (((center_y + radius) / PX_PER_ROW) + 1.0).min(area.height as f32) as u16;

    let buffer = frame.buffer_mut();
    for row in min_row..max_row {
        for col in min_col..max_col {
            let dx = (col as f32 + 0.5) * PX_PER_COL - center_x;
            let dy = (row as f32 + 0.5) * PX_PER_ROW - center_y;
            let distance = (dx * dx + dy * dy).sqrt();

            let Some(cell) = buffer.cell_mut(Position::new(area.x + col, area.y + row)) else {
                continue;
            };
            if let Some(color) = fill {
                if distance <= radius {
                    cell.set_bg(color);
                }
            } else if let Some(color) = ring {
                if (distance - radius).abs() <= PX_PER_COL {
                    cell.set_fg(color);
                    cell.set_char('░');
                }
            }
        }
    }
}

/// Debug readout of every scroll trigger, top-right of the page area.
pub fn draw_markers(frame: &mut Frame, area: Rect, page: &Page, markers: &[TriggerMarker]) {
    if markers.is_empty() {
        return;
    }

    let mut lines = Vec::with_capacity(markers.len() + 1);
    lines.push(Line::from(format!("scroll {:>7.1}", page.scroll())).bold());
    for marker in markers {
        lines.push(Line::from(format!(
            "{:<6} {:>7.1} {:>7.1} {:>4.0}%",
            marker.target,
            marker.start,
            marker.end,
            marker.progress * 100.0
        )));
    }

    let width = (lines.iter().map(Line::width).max().unwrap_or(0) as u16).min(area.width);
    let height = (lines.len() as u16).min(area.height);
    let hud = Rect::new(area.right().saturating_sub(width), area.y, width, height);
    frame.render_widget(
        Paragraph::new(lines).style(Style::new().dark_gray().on_black()),
        hud,
    );
}

/// One-line key help for the bottom row of the screen.
pub fn draw_help(frame: &mut Frame, area: Rect, markers_on: bool) {
    let marker_hint = if markers_on { " markers off  " } else { " markers on  " };
    let help = Line::from(vec![
        "q".bold(),
        " quit  ".dark_gray(),
        "wheel/↑↓".bold(),
        " scroll  ".dark_gray(),
        "m".bold(),
        marker_hint.dark_gray(),
        "g/G".bold(),
        " top/bottom".dark_gray(),
    ])
    .centered();
    frame.render_widget(help, area);
}

fn covers(element: &Element, page_y: f32) -> bool {
    let top = element.rect.top();
    page_y >= top && page_y < top + element_height(element)
}

fn element_height(element: &Element) -> f32 {
    element
        .style
        .height
        .map(Length::value)
        .unwrap_or(element.rect.height)
}

/// Style override wins over the page background; transparent falls through.
fn effective_bg(background: Option<Color>) -> Color {
    background
        .filter(|color| !color.is_transparent())
        .unwrap_or(site::PAGE_BG)
}

fn row_style(background: Color) -> Style {
    let text = if background.luminance() > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    };
    let mut style = Style::new();
    if let Some(bg) = background.to_ratatui() {
        style = style.bg(bg);
    }
    if let Some(fg) = text.to_ratatui() {
        style = style.fg(fg);
    }
    style
}

fn centered(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - length) / 2;
    let mut row = " ".repeat(left);
    row.push_str(text);
    row.push_str(&" ".repeat(width - left - length));
    row
}
