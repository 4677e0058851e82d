//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to
//! the visible area.
//!
//! Overlay rectangles computed from pointer positions can drift partially
//! outside the terminal buffer; writing out of bounds would panic or
//! corrupt rendering. Routing every string write through here keeps the
//! callers free of manual bounds checks.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer; used by
    /// headless tests that render without a terminal.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    /// Write `text` at `(x, y)`, truncated to the frame edge and dropped
    /// entirely when the anchor lies outside the frame.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if self.area.width == 0 || self.area.height == 0 {
            return;
        }
        let max_x = self.area.x.saturating_add(self.area.width);
        let max_y = self.area.y.saturating_add(self.area.height);
        if x < self.area.x || x >= max_x || y < self.area.y || y >= max_y {
            return;
        }
        let available = max_x.saturating_sub(x);
        let text = truncate_to_width(text, available as usize);
        self.buffer.set_string(x, y, text, style);
    }
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn set_string_writes_within_bounds() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 2,
        };
        let mut buf = Buffer::empty(bounds);
        let mut frame = UiFrame::from_parts(bounds, &mut buf);
        frame.set_string(1, 0, "hello", Style::default());
        let cell = buf.cell((1, 0)).expect("cell present");
        assert!(cell.symbol().starts_with('h'));
    }

    #[test]
    fn set_string_outside_bounds_is_ignored() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 2,
        };
        let mut buf = Buffer::empty(bounds);
        let mut frame = UiFrame::from_parts(bounds, &mut buf);
        // no panic, no write
        frame.set_string(100, 0, "x", Style::default());
        frame.set_string(0, 100, "x", Style::default());
    }

    #[test]
    fn set_string_truncates_at_the_edge() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 1,
        };
        let mut buf = Buffer::empty(bounds);
        let mut frame = UiFrame::from_parts(bounds, &mut buf);
        frame.set_string(3, 0, "abcdef", Style::default());
        assert!(buf.cell((4, 0)).unwrap().symbol().starts_with('b'));
    }

    #[test]
    fn truncate_to_width_short_and_long() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }
}
