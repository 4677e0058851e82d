//! Tab activity bookkeeping.
//!
//! The store is updated on tab lifecycle events and queried at startup to
//! drop entries for tabs that no longer exist. The rendering core only
//! consumes the read side; `vigor` is randomly assigned today, and this
//! store is the hook point for driving it from real activity later.

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use crate::entity::TabId;

/// Read API the rendering core is allowed to depend on.
pub trait ActivityRead {
    fn last_active(&self, id: TabId) -> Option<SystemTime>;

    fn age(&self, id: TabId) -> Option<Duration> {
        self.last_active(id)
            .map(|at| at.elapsed().unwrap_or_default())
    }
}

#[derive(Debug, Default)]
pub struct MemoryActivityStore {
    entries: BTreeMap<TabId, SystemTime>,
}

impl MemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_created(&mut self, id: TabId) {
        self.touch(id);
    }

    pub fn record_activated(&mut self, id: TabId) {
        self.touch(id);
    }

    pub fn record_updated(&mut self, id: TabId) {
        self.touch(id);
    }

    pub fn record_removed(&mut self, id: TabId) {
        self.entries.remove(&id);
    }

    fn touch(&mut self, id: TabId) {
        self.entries.insert(id, SystemTime::now());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries whose tab is no longer live. Returns how many stale
    /// entries were removed.
    pub fn prune(&mut self, live: &[TabId]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|id, _| live.contains(id));
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(removed, "pruned stale activity entries");
        }
        removed
    }
}

impl ActivityRead for MemoryActivityStore {
    fn last_active(&self, id: TabId) -> Option<SystemTime> {
        self.entries.get(&id).copied()
    }
}
