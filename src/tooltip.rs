//! Positioned tooltip overlay for the hovered plant.

use ratatui::style::Style;

use crate::constants::{WORLD_PER_CELL_X, WORLD_PER_CELL_Y};
use crate::hover::TooltipSink;
use crate::ui::UiFrame;
use crate::theme;

#[derive(Debug, Clone, PartialEq)]
struct TooltipState {
    text: String,
    x: f64,
    y: f64,
}

/// Latches the most recent show/hide effect and paints it above the
/// garden each frame while visible.
#[derive(Debug, Default)]
pub struct TooltipOverlay {
    state: Option<TooltipState>,
}

impl TooltipOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> bool {
        self.state.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.state.as_ref().map(|state| state.text.as_str())
    }

    /// Paint the tooltip one cell below-right of the pointer, pulled back
    /// inside the frame when it would overhang an edge.
    pub fn render(&self, frame: &mut UiFrame<'_>) {
        let Some(state) = &self.state else {
            return;
        };
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label = format!(" {} ", state.text);
        let width = (label.chars().count() as u16).min(area.width);
        let col = (state.x / WORLD_PER_CELL_X) as i64 + 1;
        let row = (state.y / WORLD_PER_CELL_Y) as i64 + 1;
        let max_col = i64::from(area.x) + i64::from(area.width.saturating_sub(width));
        let max_row = i64::from(area.y) + i64::from(area.height.saturating_sub(1));
        let col = (i64::from(area.x) + col).clamp(i64::from(area.x), max_col) as u16;
        let row = (i64::from(area.y) + row).clamp(i64::from(area.y), max_row) as u16;

        let style = Style::default()
            .fg(theme::tooltip_fg())
            .bg(theme::tooltip_bg());
        frame.set_string(col, row, &label, style);
    }
}

impl TooltipSink for TooltipOverlay {
    fn show(&mut self, text: &str, x: f64, y: f64) {
        self.state = Some(TooltipState {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn hide(&mut self) {
        self.state = None;
    }
}
