use rand::Rng;

use crate::constants::{PHASE_RATE_MAX, PHASE_RATE_MIN};
use crate::tabs::Tab;

/// Stable identifier matching the external tab identifier.
pub type TabId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One tab rendered as a plant.
///
/// `position` is owned by the layout engine and overwritten wholesale on
/// every layout pass. `phase` is owned by the frame scheduler and only ever
/// increases. `order` is the explicit enumeration key layout uses; it is
/// assigned once at creation and survives reconciliation, so partial tab
/// updates cannot reshuffle surviving plants.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: TabId,
    pub label: String,
    pub origin_url: String,
    pub position: Point,
    pub vigor: f64,
    pub phase: f64,
    pub phase_rate: f64,
    pub order: u64,
}

impl Entity {
    /// Create an entity for `tab` with randomized decorative attributes.
    ///
    /// `vigor` and the initial `phase` land in `[0, 1)`; `phase_rate` is
    /// drawn from the configured window so neighbouring plants fall out of
    /// sync within a few frames.
    pub fn sprout(tab: &Tab, order: u64, rng: &mut impl Rng) -> Self {
        Self {
            id: tab.id,
            label: tab.title.clone(),
            origin_url: tab.url.clone(),
            position: Point::default(),
            vigor: rng.random_range(0.0..1.0),
            phase: rng.random_range(0.0..1.0),
            phase_rate: rng.random_range(PHASE_RATE_MIN..PHASE_RATE_MAX),
            order,
        }
    }

    /// Advance the animation angle by one frame.
    pub fn advance(&mut self) {
        self.phase += self.phase_rate;
    }
}
