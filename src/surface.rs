//! Rasterizing [`DrawSurface`] calls into a terminal cell buffer.
//!
//! World pixels map onto cells through [`WORLD_PER_CELL_X`] /
//! [`WORLD_PER_CELL_Y`]; every write is clipped to the target area, so
//! shapes that drift past the viewport edge degrade to partial glyphs
//! instead of panicking the buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::constants::{WORLD_PER_CELL_X, WORLD_PER_CELL_Y};
use crate::entity::Point;
use crate::render::DrawSurface;

const CURVE_SAMPLES: usize = 24;

#[derive(Debug, Clone, Copy)]
struct Transform {
    dx: f64,
    dy: f64,
    scale: f64,
}

impl Transform {
    const IDENTITY: Transform = Transform {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };

    fn apply(self, point: Point) -> Point {
        Point::new(self.dx + point.x * self.scale, self.dy + point.y * self.scale)
    }
}

pub struct BufferSurface<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
    stack: Vec<Transform>,
    current: Transform,
    circle_symbol: &'static str,
    ellipse_symbol: &'static str,
}

impl<'a> BufferSurface<'a> {
    pub fn new(area: Rect, buffer: &'a mut Buffer) -> Self {
        let area = area.intersection(buffer.area);
        Self {
            area,
            buffer,
            stack: Vec::new(),
            current: Transform::IDENTITY,
            circle_symbol: fallback(crate::icons::glyph_symbol("bloom"), "@"),
            ellipse_symbol: fallback(crate::icons::glyph_symbol("wilt"), "o"),
        }
    }

    fn cell_of(&self, world: Point) -> Option<(u16, u16)> {
        let col = (world.x / WORLD_PER_CELL_X).floor();
        let row = (world.y / WORLD_PER_CELL_Y).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let col = col as u64;
        let row = row as u64;
        if col >= u64::from(self.area.width) || row >= u64::from(self.area.height) {
            return None;
        }
        Some((
            self.area.x.saturating_add(col as u16),
            self.area.y.saturating_add(row as u16),
        ))
    }

    fn cell_center(&self, col: u16, row: u16) -> Point {
        Point::new(
            (f64::from(col - self.area.x) + 0.5) * WORLD_PER_CELL_X,
            (f64::from(row - self.area.y) + 0.5) * WORLD_PER_CELL_Y,
        )
    }

    fn put(&mut self, world: Point, symbol: &str, color: Color) {
        if let Some((col, row)) = self.cell_of(world)
            && let Some(cell) = self.buffer.cell_mut((col, row))
        {
            cell.set_symbol(symbol);
            cell.set_style(Style::default().fg(color));
        }
    }

    /// Cells whose centers can fall inside a world-space bounding box.
    fn candidate_cells(&self, min: Point, max: Point) -> Vec<(u16, u16)> {
        let mut cells = Vec::new();
        let col_lo = (min.x / WORLD_PER_CELL_X).floor().max(0.0) as u64;
        let row_lo = (min.y / WORLD_PER_CELL_Y).floor().max(0.0) as u64;
        let col_hi = (max.x / WORLD_PER_CELL_X).ceil().max(0.0) as u64;
        let row_hi = (max.y / WORLD_PER_CELL_Y).ceil().max(0.0) as u64;
        for row in row_lo..=row_hi.min(u64::from(self.area.height).saturating_sub(1)) {
            for col in col_lo..=col_hi.min(u64::from(self.area.width).saturating_sub(1)) {
                cells.push((
                    self.area.x.saturating_add(col as u16),
                    self.area.y.saturating_add(row as u16),
                ));
            }
        }
        cells
    }
}

fn fallback(symbol: &'static str, default: &'static str) -> &'static str {
    if symbol.is_empty() { default } else { symbol }
}

fn quadratic(from: Point, control: Point, to: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * from.x + 2.0 * u * t * control.x + t * t * to.x,
        u * u * from.y + 2.0 * u * t * control.y + t * t * to.y,
    )
}

fn slope_symbol(previous: Point, next: Point) -> &'static str {
    let dx = next.x - previous.x;
    let dy = next.y - previous.y;
    if dx.abs() < dy.abs() * 0.5 {
        "|"
    } else if dx * dy < 0.0 {
        "/"
    } else {
        "\\"
    }
}

impl DrawSurface for BufferSurface<'_> {
    fn clear(&mut self) {
        for row in self.area.y..self.area.y.saturating_add(self.area.height) {
            for col in self.area.x..self.area.x.saturating_add(self.area.width) {
                if let Some(cell) = self.buffer.cell_mut((col, row)) {
                    cell.reset();
                }
            }
        }
    }

    fn save(&mut self) {
        self.stack.push(self.current);
    }

    fn restore(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.current.dx += dx * self.current.scale;
        self.current.dy += dy * self.current.scale;
    }

    fn scale(&mut self, factor: f64) {
        self.current.scale *= factor;
    }

    fn stroke_curve(&mut self, from: Point, control: Point, to: Point, color: Color) {
        let transform = self.current;
        let mut previous = transform.apply(from);
        for step in 1..=CURVE_SAMPLES {
            let t = step as f64 / CURVE_SAMPLES as f64;
            let next = transform.apply(quadratic(from, control, to, t));
            self.put(next, slope_symbol(previous, next), color);
            previous = next;
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let transform = self.current;
        let center = transform.apply(center);
        let radius = radius * transform.scale;
        let min = Point::new(center.x - radius, center.y - radius);
        let max = Point::new(center.x + radius, center.y + radius);
        let symbol = self.circle_symbol;
        for (col, row) in self.candidate_cells(min, max) {
            if self.cell_center(col, row).distance(center) <= radius
                && let Some(cell) = self.buffer.cell_mut((col, row))
            {
                cell.set_symbol(symbol);
                cell.set_style(Style::default().fg(color));
            }
        }
        // radii below one cell still leave a mark
        self.put(center, symbol, color);
    }

    fn fill_ellipse(&mut self, center: Point, semi_x: f64, semi_y: f64, rotation: f64, color: Color) {
        let transform = self.current;
        let center = transform.apply(center);
        let semi_x = semi_x * transform.scale;
        let semi_y = semi_y * transform.scale;
        let extent = semi_x.max(semi_y);
        let min = Point::new(center.x - extent, center.y - extent);
        let max = Point::new(center.x + extent, center.y + extent);
        let (sin, cos) = rotation.sin_cos();
        let symbol = self.ellipse_symbol;
        for (col, row) in self.candidate_cells(min, max) {
            let probe = self.cell_center(col, row);
            let local_x = (probe.x - center.x) * cos + (probe.y - center.y) * sin;
            let local_y = (center.x - probe.x) * sin + (probe.y - center.y) * cos;
            let inside = (local_x / semi_x).powi(2) + (local_y / semi_y).powi(2) <= 1.0;
            if inside && let Some(cell) = self.buffer.cell_mut((col, row)) {
                cell.set_symbol(symbol);
                cell.set_style(Style::default().fg(color));
            }
        }
        self.put(center, symbol, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_area() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 20,
        }
    }

    fn non_blank(buffer: &Buffer) -> usize {
        let area = buffer.area;
        let mut count = 0;
        for row in area.y..area.y + area.height {
            for col in area.x..area.x + area.width {
                if let Some(cell) = buffer.cell((col, row))
                    && cell.symbol() != " "
                {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn circle_marks_cells_near_center() {
        let area = surface_area();
        let mut buffer = Buffer::empty(area);
        let mut surface = BufferSurface::new(area, &mut buffer);
        surface.fill_circle(Point::new(200.0, 200.0), 12.0, Color::Red);
        // world (200, 200) is cell (20, 10)
        assert_eq!(buffer.cell((20, 10)).unwrap().symbol(), "@");
    }

    #[test]
    fn out_of_bounds_drawing_is_clipped() {
        let area = surface_area();
        let mut buffer = Buffer::empty(area);
        let mut surface = BufferSurface::new(area, &mut buffer);
        surface.fill_circle(Point::new(-500.0, -500.0), 8.0, Color::Red);
        surface.fill_circle(Point::new(9999.0, 9999.0), 8.0, Color::Red);
        surface.stroke_curve(
            Point::new(-100.0, -100.0),
            Point::new(-50.0, -50.0),
            Point::new(-10.0, -10.0),
            Color::Green,
        );
        assert_eq!(non_blank(&buffer), 0);
    }

    #[test]
    fn translate_offsets_subsequent_draws() {
        let area = surface_area();
        let mut buffer = Buffer::empty(area);
        let mut surface = BufferSurface::new(area, &mut buffer);
        surface.save();
        surface.translate(100.0, 100.0);
        surface.fill_circle(Point::new(0.0, 0.0), 2.0, Color::Red);
        surface.restore();
        // world (100, 100) is cell (10, 5)
        assert_eq!(buffer.cell((10, 5)).unwrap().symbol(), "@");
    }

    #[test]
    fn restore_pops_the_transform() {
        let area = surface_area();
        let mut buffer = Buffer::empty(area);
        let mut surface = BufferSurface::new(area, &mut buffer);
        surface.save();
        surface.translate(100.0, 100.0);
        surface.restore();
        surface.fill_circle(Point::new(5.0, 5.0), 1.0, Color::Red);
        assert_eq!(buffer.cell((0, 0)).unwrap().symbol(), "@");
    }

    #[test]
    fn clear_resets_the_area() {
        let area = surface_area();
        let mut buffer = Buffer::empty(area);
        let mut surface = BufferSurface::new(area, &mut buffer);
        surface.fill_circle(Point::new(200.0, 200.0), 20.0, Color::Red);
        assert!(non_blank(&buffer) > 0);
        let mut surface = BufferSurface::new(area, &mut buffer);
        surface.clear();
        assert_eq!(non_blank(&buffer), 0);
    }

    #[test]
    fn curve_leaves_a_trail() {
        let area = surface_area();
        let mut buffer = Buffer::empty(area);
        let mut surface = BufferSurface::new(area, &mut buffer);
        surface.stroke_curve(
            Point::new(200.0, 300.0),
            Point::new(205.0, 200.0),
            Point::new(210.0, 100.0),
            Color::Green,
        );
        assert!(non_blank(&buffer) >= 3);
    }
}
