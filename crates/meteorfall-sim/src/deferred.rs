//! Deferred actions keyed by the tick they become due.
//!
//! Stands in for timed waits: an action is scheduled for a future tick and
//! drained at the start of that tick, while every other entity keeps updating.

use std::collections::BTreeMap;

use meteorfall_core::types::EntityHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Remove a meteor whose hit points ran out.
    Destroy(EntityHandle),
}

#[derive(Debug, Default)]
pub struct DeferredQueue {
    actions: BTreeMap<u64, Vec<DeferredAction>>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_tick: u64, action: DeferredAction) {
        self.actions.entry(due_tick).or_default().push(action);
    }

    /// Remove and return every action due at or before `tick`, oldest first.
    pub fn drain_due(&mut self, tick: u64) -> Vec<DeferredAction> {
        let later = self.actions.split_off(&(tick + 1));
        let due = std::mem::replace(&mut self.actions, later);
        due.into_values().flatten().collect()
    }

    pub fn len(&self) -> usize {
        self.actions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
