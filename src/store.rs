//! Planner State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The collection
//! transforms live on the plain struct so they can be applied to any holder.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{TaskId, TaskItem};
use crate::vibes::{DEFAULT_PROMPT, DEFAULT_VIBE};

/// Client-held list state with field-level reactivity
#[derive(Clone, Debug, PartialEq, Store)]
pub struct PlannerState {
    /// Text typed into the generator
    pub prompt: String,
    /// Selected vibe key
    pub vibe: String,
    /// Task collection; ids are unique
    pub items: Vec<TaskItem>,
    /// Generate requests that have not settled yet
    pub pending_generations: u32,
    /// Last user-facing error, empty when none
    pub error: String,
    /// Sequence token of the most recently dispatched generation
    pub generation_seq: u64,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerState {
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            vibe: DEFAULT_VIBE.to_string(),
            items: Vec::new(),
            pending_generations: 0,
            error: String::new(),
            generation_seq: 0,
        }
    }

    /// True while any generate request is outstanding
    pub fn loading(&self) -> bool {
        self.pending_generations > 0
    }

    /// Replace the whole collection (initial load)
    pub fn replace_items(&mut self, items: Vec<TaskItem>) {
        self.items = dedupe(items);
    }

    /// Put a generated batch in front of the existing items.
    ///
    /// Batch order is kept; an existing item with the same id as a batch
    /// entry is dropped. Returns the number of items prepended.
    pub fn prepend_batch(&mut self, batch: Vec<TaskItem>) -> usize {
        let mut merged = dedupe(batch);
        let count = merged.len();
        let fresh: HashSet<TaskId> = merged.iter().map(|i| i.id.clone()).collect();
        merged.extend(self.items.drain(..).filter(|i| !fresh.contains(&i.id)));
        self.items = merged;
        count
    }

    /// Swap the item with `id` for the server's representation, keeping its
    /// position. Returns false when no such item is held.
    pub fn apply_update(&mut self, id: &TaskId, updated: TaskItem) -> bool {
        let Some(pos) = self.items.iter().position(|i| &i.id == id) else {
            return false;
        };
        let new_id = updated.id.clone();
        self.items[pos] = updated;
        if &new_id != id {
            let mut index = 0;
            self.items.retain(|i| {
                let keep = index == pos || i.id != new_id;
                index += 1;
                keep
            });
        }
        true
    }

    /// Remove the item with `id`. Returns false when no such item is held.
    pub fn remove_item(&mut self, id: &TaskId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() != before
    }

    #[cfg(test)]
    pub fn find_item(&self, id: &TaskId) -> Option<&TaskItem> {
        self.items.iter().find(|i| &i.id == id)
    }
}

/// Keep the first occurrence of every id
fn dedupe(items: Vec<TaskItem>) -> Vec<TaskItem> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|i| seen.insert(i.id.clone())).collect()
}

// ========================
// State Holders
// ========================

/// Something the planner can read and update state through.
///
/// Implemented for the reactive store used by the app and for a plain
/// `Rc<RefCell<_>>` used off the reactive graph.
pub trait StateCell: Clone {
    fn with_state<R>(&self, f: impl FnOnce(&PlannerState) -> R) -> R;
    fn update_state(&self, f: impl FnOnce(&mut PlannerState));
}

impl StateCell for Rc<RefCell<PlannerState>> {
    fn with_state<R>(&self, f: impl FnOnce(&PlannerState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut PlannerState)) {
        f(&mut self.borrow_mut())
    }
}

/// Type alias for the store
pub type PlannerStore = Store<PlannerState>;

impl StateCell for PlannerStore {
    fn with_state<R>(&self, f: impl FnOnce(&PlannerState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut PlannerState)) {
        self.update(f)
    }
}
