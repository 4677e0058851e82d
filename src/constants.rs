//! Shared crate-wide constants.

/// Default grid cell spacing in world pixels. One plant occupies one cell;
/// the layout engine derives its column count from `viewport_width / spacing`.
pub const CELL_SPACING: f64 = 80.0;

/// Default hover radius in world pixels used by the hit-test layer.
///
/// A pointer within this distance of a plant's base position counts as
/// hovering it. Increase for a more forgiving hover target; decrease when
/// plants sit close together and precision matters more.
pub const HOVER_RADIUS: f64 = 25.0;

/// Vigor threshold selecting the wilted glyph.
///
/// Entities with `vigor < WILT_THRESHOLD` render the blooming branch;
/// `vigor >= WILT_THRESHOLD` renders the wilted branch. A hard edge, not
/// a gradient.
pub const WILT_THRESHOLD: f64 = 0.7;

/// Peak horizontal displacement of a stem tip, in world pixels.
/// The per-frame sway is `SWAY_AMPLITUDE * sin(phase)`.
pub const SWAY_AMPLITUDE: f64 = 6.0;

/// Stem height from base to (un-swayed) tip, in world pixels.
pub const STEM_HEIGHT: f64 = 36.0;

/// Bloom glyph radii: the outer disc and the concentric inner disc.
pub const BLOOM_OUTER_RADIUS: f64 = 7.0;
pub const BLOOM_INNER_RADIUS: f64 = 3.5;

/// Wilt glyph ellipse: semi-axes and tilt (radians).
pub const WILT_SEMI_X: f64 = 8.0;
pub const WILT_SEMI_Y: f64 = 3.5;
pub const WILT_TILT: f64 = 0.5;

/// Bounds for the per-entity phase advance applied each frame. Randomizing
/// the rate inside this window desynchronizes plants visually while keeping
/// every stem's sway period within a factor of ~3.
pub const PHASE_RATE_MIN: f64 = 0.03;
pub const PHASE_RATE_MAX: f64 = 0.09;

/// World pixels represented by one terminal cell, per axis.
///
/// Terminal cells are roughly twice as tall as they are wide; mapping a
/// cell to a 10x20 world rectangle keeps plant proportions close to square
/// on screen. The raster surface, pointer translation, and tooltip
/// placement all share these factors.
pub const WORLD_PER_CELL_X: f64 = 10.0;
pub const WORLD_PER_CELL_Y: f64 = 20.0;
