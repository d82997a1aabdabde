//! Drawing overlays and item rows into a ratatui buffer.

use super::demo_adapter::DemoOverlay;
use crate::decoration::Surface;
use crate::model::Level;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthChar;

/// Style of a band at `level`.
pub fn band_style(level: Level) -> Style {
    match level {
        Level::Header => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Level::SubHeader => Style::default().fg(Color::Black).bg(Color::Yellow),
    }
}

/// Truncate `text` to at most `width` columns and pad it to exactly `width`.
///
/// Wide characters that would straddle the edge are dropped.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// A list area of a buffer that overlays and rows are drawn into.
///
/// Coordinates passed in are relative to `area`; rows outside it are clipped.
pub struct BufferSurface<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    /// Surface over `area` of `buffer`.
    pub fn new(buffer: &'a mut Buffer, area: Rect) -> Self {
        Self { buffer, area }
    }

    /// Write one full-width row at relative `top`, if visible.
    pub fn draw_row(&mut self, left: i32, top: i32, text: &str, style: Style) {
        if top < 0 || top >= i32::from(self.area.height) {
            return;
        }
        let left = left.clamp(0, i32::from(self.area.width)) as u16;
        let width = usize::from(self.area.width - left);
        if width == 0 {
            return;
        }
        self.buffer.set_string(
            self.area.x + left,
            self.area.y + top as u16,
            fit_to_width(text, width),
            style,
        );
    }
}

impl Surface<DemoOverlay> for BufferSurface<'_> {
    fn draw_overlay(&mut self, level: Level, overlay: &DemoOverlay, left: i32, top: i32) {
        self.draw_row(left, top, &overlay.label, band_style(level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buffer: &Buffer, y: u16) -> String {
        let area = buffer.area();
        (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn fit_truncates_long_text() {
        assert_eq!(fit_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn fit_drops_wide_char_at_edge() {
        assert_eq!(fit_to_width("a日", 2), "a ");
    }

    #[test]
    fn rows_outside_area_are_clipped() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 6, 2));
        let mut surface = BufferSurface::new(&mut buffer, Rect::new(0, 0, 6, 2));
        surface.draw_row(0, -1, "above", Style::default());
        surface.draw_row(0, 2, "below", Style::default());
        surface.draw_row(0, 1, "in", Style::default());
        assert_eq!(row(&buffer, 0), "      ");
        assert_eq!(row(&buffer, 1), "in    ");
    }

    #[test]
    fn overlay_draws_label_with_band_style() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 1));
        let overlay = DemoOverlay {
            level: Level::Header,
            label: "Header 1".to_string(),
            bound_to: None,
        };
        BufferSurface::new(&mut buffer, Rect::new(0, 0, 10, 1)).draw_overlay(
            Level::Header,
            &overlay,
            0,
            0,
        );
        assert_eq!(row(&buffer, 0), "Header 1  ");
        assert_eq!(buffer[(0, 0)].bg, Color::Cyan);
    }
}
