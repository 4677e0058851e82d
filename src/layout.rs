//! Centered-grid layout for the garden.
//!
//! One layout pass assigns every entity a position inside the viewport.
//! The pass is a pure function of entity count, enumeration order, and
//! viewport size; calling it twice with unchanged inputs yields identical
//! positions. It runs on initial planting, reconciliation, and viewport
//! resize, never from inside a frame tick.

use crate::constants::CELL_SPACING;
use crate::entity::{Entity, Point};

#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub cell_spacing: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            cell_spacing: CELL_SPACING,
        }
    }
}

impl GridLayout {
    pub fn new(cell_spacing: f64) -> Self {
        Self { cell_spacing }
    }

    /// Number of grid columns for a viewport width. At least 1, so a
    /// degenerate viewport can never divide an index by zero.
    pub fn columns(&self, viewport_width: f64) -> usize {
        ((viewport_width / self.cell_spacing).floor() as usize).max(1)
    }

    /// Assign positions to every entity, centering the grid on the viewport.
    ///
    /// Entities are placed in the order they appear in the slice: entity
    /// `i` lands in column `i % cols`, row `i / cols`. Empty input is a
    /// no-op. A zero-area viewport skips the pass entirely so positions
    /// stay finite until a usable size arrives.
    pub fn layout(&self, entities: &mut [Entity], viewport_width: f64, viewport_height: f64) {
        if entities.is_empty() {
            return;
        }
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            tracing::debug!(
                viewport_width,
                viewport_height,
                "skipping layout pass for zero-area viewport"
            );
            return;
        }

        let count = entities.len();
        let cols = self.columns(viewport_width);
        let rows = count.div_ceil(cols).max(1);

        let grid_width = count.min(cols) as f64 * self.cell_spacing;
        let grid_height = rows as f64 * self.cell_spacing;
        let origin_x = viewport_width / 2.0 - grid_width / 2.0 + self.cell_spacing / 2.0;
        let origin_y = viewport_height / 2.0 - grid_height / 2.0 + self.cell_spacing / 2.0;

        for (index, entity) in entities.iter_mut().enumerate() {
            let col = index % cols;
            let row = index / cols;
            entity.position = Point::new(
                origin_x + col as f64 * self.cell_spacing,
                origin_y + row as f64 * self.cell_spacing,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::Tab;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn entities(count: usize) -> Vec<Entity> {
        let mut rng = SmallRng::seed_from_u64(11);
        (0..count as u64)
            .map(|id| {
                let tab = Tab {
                    id,
                    title: String::new(),
                    url: format!("https://example.org/{id}"),
                };
                Entity::sprout(&tab, id, &mut rng)
            })
            .collect()
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut none: Vec<Entity> = Vec::new();
        GridLayout::default().layout(&mut none, 800.0, 600.0);
    }

    #[test]
    fn grid_is_centered_exactly() {
        // 800x600 viewport, spacing 80, 4 entities: one row of four cells.
        let mut plants = entities(4);
        let grid = GridLayout::new(80.0);
        grid.layout(&mut plants, 800.0, 600.0);

        let grid_width = 4.0 * 80.0;
        assert_eq!(plants[0].position.x, 400.0 - grid_width / 2.0 + 40.0);
        // one 80-px row centered on y=300 puts the row itself at 300
        assert_eq!(plants[0].position.y, 300.0);
        // single row: every y matches the first
        for plant in &plants {
            assert_eq!(plant.position.y, plants[0].position.y);
        }
        // columns advance by one spacing
        assert_eq!(plants[1].position.x - plants[0].position.x, 80.0);
        assert_eq!(plants[3].position.x - plants[0].position.x, 240.0);
    }

    #[test]
    fn layout_is_idempotent() {
        let mut plants = entities(10);
        let grid = GridLayout::new(80.0);
        grid.layout(&mut plants, 640.0, 480.0);
        let first: Vec<_> = plants.iter().map(|p| p.position).collect();
        grid.layout(&mut plants, 640.0, 480.0);
        let second: Vec<_> = plants.iter().map(|p| p.position).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn positions_stay_within_half_cell_of_viewport() {
        for count in [1usize, 3, 7, 12, 25] {
            let mut plants = entities(count);
            let grid = GridLayout::new(80.0);
            grid.layout(&mut plants, 800.0, 600.0);
            for plant in &plants {
                assert!(plant.position.x >= -40.0 && plant.position.x <= 840.0);
                assert!(plant.position.y >= -40.0 && plant.position.y <= 640.0);
                assert!(plant.position.x.is_finite());
                assert!(plant.position.y.is_finite());
            }
        }
    }

    #[test]
    fn wraps_rows_when_columns_run_out() {
        // width 240 / spacing 80 = 3 columns; 5 entities span two rows.
        let mut plants = entities(5);
        let grid = GridLayout::new(80.0);
        grid.layout(&mut plants, 240.0, 600.0);
        assert_eq!(plants[0].position.y, plants[2].position.y);
        assert_eq!(plants[3].position.y, plants[4].position.y);
        assert_eq!(plants[3].position.y - plants[0].position.y, 80.0);
        assert_eq!(plants[3].position.x, plants[0].position.x);
    }

    #[test]
    fn zero_area_viewport_skips_without_nan() {
        let mut plants = entities(4);
        let grid = GridLayout::default();
        grid.layout(&mut plants, 800.0, 600.0);
        let placed: Vec<_> = plants.iter().map(|p| p.position).collect();

        grid.layout(&mut plants, 0.0, 600.0);
        grid.layout(&mut plants, 800.0, 0.0);
        grid.layout(&mut plants, -5.0, -5.0);
        for (plant, expected) in plants.iter().zip(placed) {
            assert_eq!(plant.position, expected);
            assert!(plant.position.x.is_finite());
        }
    }

    #[test]
    fn narrow_viewport_still_gets_one_column() {
        let mut plants = entities(3);
        let grid = GridLayout::new(80.0);
        // narrower than one cell: floor would be 0, clamped to 1 column
        grid.layout(&mut plants, 50.0, 600.0);
        assert_eq!(plants[0].position.x, plants[1].position.x);
        assert_eq!(plants[1].position.x, plants[2].position.x);
        assert_eq!(plants[1].position.y - plants[0].position.y, 80.0);
    }
}
