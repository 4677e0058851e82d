//! The garden engine: owns the entity collection, viewport size, and
//! layout configuration, and exposes the operations the event loop calls.
//!
//! One engine instance is constructed at startup and passed by reference
//! everywhere; there is no module-level state. The frame scheduler calls
//! `grow` + `draw`, the resize handler calls `resize`, and pointer-move
//! events call `pointer_moved`. None of these run concurrently.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::constants::HOVER_RADIUS;
use crate::entity::{Entity, TabId};
use crate::hover::{self, TooltipSink};
use crate::layout::GridLayout;
use crate::render::{DrawSurface, render_plant};
use crate::tabs::Tab;

/// Shared cancellation flag for the frame cycle.
///
/// The run loop checks it once per iteration, so setting it from a key
/// handler or the hosting panel's teardown path stops the perpetual cycle
/// deterministically instead of leaking a scheduled callback.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct Garden {
    entities: Vec<Entity>,
    viewport: (f64, f64),
    grid: GridLayout,
    hover_radius: f64,
    rng: SmallRng,
    next_order: u64,
}

impl Garden {
    pub fn new(grid: GridLayout) -> Self {
        Self::with_rng(grid, SmallRng::from_os_rng())
    }

    /// Deterministic construction for tests and reproducible sessions.
    pub fn with_seed(grid: GridLayout, seed: u64) -> Self {
        Self::with_rng(grid, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridLayout, rng: SmallRng) -> Self {
        Self {
            entities: Vec::new(),
            viewport: (0.0, 0.0),
            grid,
            hover_radius: HOVER_RADIUS,
            rng,
            next_order: 0,
        }
    }

    pub fn set_hover_radius(&mut self, radius: f64) {
        self.hover_radius = radius;
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    /// Create the garden in bulk from the current tab list, replacing any
    /// previous entities, then run a layout pass.
    pub fn plant(&mut self, tabs: &[Tab]) {
        self.entities.clear();
        self.next_order = 0;
        for tab in tabs {
            let order = self.next_order;
            self.next_order += 1;
            self.entities.push(Entity::sprout(tab, order, &mut self.rng));
        }
        tracing::debug!(count = self.entities.len(), "planted garden");
        self.relayout();
    }

    /// Bring the entity set in line with `tabs` without disturbing the
    /// animation state of surviving plants.
    ///
    /// Survivors keep their `phase`, `phase_rate`, `vigor`, and `order`;
    /// new tabs sprout at the end of the enumeration order; entities whose
    /// tab vanished are removed. Positions are recomputed wholesale.
    pub fn reconcile(&mut self, tabs: &[Tab]) {
        let before = self.entities.len();
        self.entities
            .retain(|entity| tabs.iter().any(|tab| tab.id == entity.id));
        let mut added = 0usize;
        for tab in tabs {
            if self.entities.iter().any(|entity| entity.id == tab.id) {
                continue;
            }
            let order = self.next_order;
            self.next_order += 1;
            self.entities.push(Entity::sprout(tab, order, &mut self.rng));
            added += 1;
        }
        self.entities.sort_by_key(|entity| entity.order);
        tracing::debug!(
            removed = before + added - self.entities.len(),
            added,
            "reconciled garden"
        );
        self.relayout();
    }

    /// Adopt a new viewport size and re-run layout. Animation phase is
    /// untouched; a resize only moves plants.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
        self.relayout();
    }

    fn relayout(&mut self) {
        let (width, height) = self.viewport;
        self.grid.layout(&mut self.entities, width, height);
    }

    /// Advance every plant's animation angle by one frame.
    pub fn grow(&mut self) {
        for entity in &mut self.entities {
            entity.advance();
        }
    }

    /// Clear the surface and draw every plant from its current state.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.clear();
        for entity in &self.entities {
            render_plant(surface, entity.position, entity.phase, entity.vigor);
        }
    }

    /// Resolve a pointer position and drive the tooltip sink.
    ///
    /// Runs only on pointer-move events; a stationary pointer produces no
    /// effects. Origin-parse failures degrade to a placeholder inside
    /// `tooltip_text`, so this can never unwind into the frame cycle.
    pub fn pointer_moved(&self, x: f64, y: f64, sink: &mut dyn TooltipSink) {
        match hover::hit_test(&self.entities, x, y, self.hover_radius) {
            Some(entity) => sink.show(&hover::tooltip_text(entity), x, y),
            None => sink.hide(),
        }
    }

    /// Live entity ids, used to prune the activity store at startup.
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.entities.iter().map(|entity| entity.id).collect()
    }
}
