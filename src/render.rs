//! Drawing one plant from its animation state.
//!
//! `render_plant` is a pure projection of `(position, phase, vigor)` onto a
//! [`DrawSurface`]; it reads no other entity state, so the scheduler's
//! bookkeeping can change freely without touching this module.

use ratatui::style::Color;

use crate::constants::{
    BLOOM_INNER_RADIUS, BLOOM_OUTER_RADIUS, STEM_HEIGHT, SWAY_AMPLITUDE, WILT_SEMI_X, WILT_SEMI_Y,
    WILT_THRESHOLD, WILT_TILT,
};
use crate::entity::Point;
use crate::theme;

/// Seam to the host's 2D immediate-mode canvas.
///
/// Coordinates are world pixels. `save`/`restore` manage a transform stack;
/// `translate` and uniform `scale` compose onto the current transform. The
/// engine draws each plant inside its own save/restore pair.
pub trait DrawSurface {
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, factor: f64);
    /// Stroke a quadratic curve from `from` to `to` bent through `control`.
    fn stroke_curve(&mut self, from: Point, control: Point, to: Point, color: Color);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
    /// Fill an axis-aligned ellipse rotated by `rotation` radians.
    fn fill_ellipse(&mut self, center: Point, semi_x: f64, semi_y: f64, rotation: f64, color: Color);
}

/// Draw one plant: a curved stem swaying with `phase`, topped by a bloom
/// (two concentric discs) or, for `vigor >= 0.7`, a wilted tilted ellipse.
pub fn render_plant(surface: &mut dyn DrawSurface, position: Point, phase: f64, vigor: f64) {
    let sway = SWAY_AMPLITUDE * phase.sin();
    let tip = Point::new(sway, -STEM_HEIGHT);

    surface.save();
    surface.translate(position.x, position.y);
    surface.stroke_curve(
        Point::new(0.0, 0.0),
        Point::new(sway * 0.35, -STEM_HEIGHT * 0.55),
        tip,
        theme::stem(),
    );
    if vigor < WILT_THRESHOLD {
        surface.fill_circle(tip, BLOOM_OUTER_RADIUS, theme::bloom_outer());
        surface.fill_circle(tip, BLOOM_INNER_RADIUS, theme::bloom_inner());
    } else {
        surface.fill_ellipse(tip, WILT_SEMI_X, WILT_SEMI_Y, WILT_TILT, theme::wilt());
    }
    surface.restore();
}

/// Captures draw calls for assertions instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Scale { factor: f64 },
    Curve { from: Point, control: Point, to: Point },
    Circle { center: Point, radius: f64 },
    Ellipse { center: Point, semi_x: f64, semi_y: f64, rotation: f64 },
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    pub fn ellipses(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Ellipse { .. }))
            .count()
    }

    pub fn curves(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Curve { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    fn scale(&mut self, factor: f64) {
        self.ops.push(DrawOp::Scale { factor });
    }

    fn stroke_curve(&mut self, from: Point, control: Point, to: Point, _color: Color) {
        self.ops.push(DrawOp::Curve { from, control, to });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, _color: Color) {
        self.ops.push(DrawOp::Circle { center, radius });
    }

    fn fill_ellipse(
        &mut self,
        center: Point,
        semi_x: f64,
        semi_y: f64,
        rotation: f64,
        _color: Color,
    ) {
        self.ops.push(DrawOp::Ellipse {
            center,
            semi_x,
            semi_y,
            rotation,
        });
    }
}
