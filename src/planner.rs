//! List Planner
//!
//! Turns user intent into calls against the todo service and folds the
//! responses into [`crate::store::PlannerState`]. Only generate reports failures to the
//! user; load, toggle and delete leave the list untouched on failure and hand
//! the error back to the caller (and the log) instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::{ApiResult, TodoApi};
use crate::config::GenerationOrdering;
use crate::models::{GenerateRequest, TaskId};
use crate::store::StateCell;
use crate::vibes::{theme_for, Theme};

/// Items requested per generate call
pub const GENERATE_BATCH_SIZE: u32 = 6;

/// Message shown when a generate call fails for any reason
pub const GENERATE_ERROR_MESSAGE: &str = "Failed to generate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The batch was prepended; holds its length
    Applied(usize),
    /// A newer generation was dispatched first; the batch was discarded
    Superseded,
}

pub struct Planner<A, S> {
    api: Arc<A>,
    state: S,
    ordering: GenerationOrdering,
    activated: Arc<AtomicBool>,
}

impl<A, S: Clone> Clone for Planner<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: self.state.clone(),
            ordering: self.ordering,
            activated: Arc::clone(&self.activated),
        }
    }
}

/// Decrements the pending generation count when dropped, so loading clears
/// whether the request succeeds, fails or is abandoned mid-flight.
struct PendingGeneration<S: StateCell> {
    state: S,
}

impl<S: StateCell> Drop for PendingGeneration<S> {
    fn drop(&mut self) {
        self.state
            .update_state(|s| s.pending_generations = s.pending_generations.saturating_sub(1));
    }
}

impl<A: TodoApi, S: StateCell> Planner<A, S> {
    pub fn new(api: A, state: S, ordering: GenerationOrdering) -> Self {
        Self {
            api: Arc::new(api),
            state,
            ordering,
            activated: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        self.state.update_state(|s| s.prompt = prompt);
    }

    /// Any key is accepted; unknown keys are sent verbatim and themed with
    /// the fallback.
    pub fn select_vibe(&self, vibe: impl Into<String>) {
        let vibe = vibe.into();
        self.state.update_state(|s| s.vibe = vibe);
    }

    pub fn theme(&self) -> Theme {
        self.state.with_state(|s| theme_for(&s.vibe))
    }

    pub fn clear_error(&self) {
        self.state.update_state(|s| s.error.clear());
    }

    /// Initial load. Runs once per planner; later calls return `None` without
    /// touching the service.
    pub async fn activate(&self) -> Option<ApiResult<usize>> {
        if self.activated.swap(true, Ordering::SeqCst) {
            debug!("planner already activated, skipping initial load");
            return None;
        }
        Some(self.load_all().await)
    }

    async fn load_all(&self) -> ApiResult<usize> {
        match self.api.list_todos().await {
            Ok(items) => {
                let count = items.len();
                self.state.update_state(|s| s.replace_items(items));
                info!(count, "loaded todos");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "initial load failed, starting with an empty list");
                Err(e)
            }
        }
    }

    /// Request a batch for the current prompt and vibe and prepend it
    pub async fn generate(&self) -> ApiResult<GenerateOutcome> {
        let mut request = None;
        self.state.update_state(|s| {
            s.pending_generations += 1;
            s.generation_seq += 1;
            s.error.clear();
            request = Some((
                GenerateRequest {
                    prompt: s.prompt.clone(),
                    vibe: s.vibe.clone(),
                    count: GENERATE_BATCH_SIZE,
                },
                s.generation_seq,
            ));
        });
        let _pending = PendingGeneration { state: self.state.clone() };
        let (request, seq) = match request {
            Some(dispatched) => dispatched,
            // The state holder dropped the update (disposed store)
            None => return Ok(GenerateOutcome::Superseded),
        };

        debug!(seq, vibe = %request.vibe, "dispatching generate");
        let result = self.api.generate_todos(&request).await;

        let superseded = self.ordering == GenerationOrdering::Latest
            && self.state.with_state(|s| s.generation_seq != seq);

        match result {
            Ok(_) if superseded => {
                debug!(seq, "discarding generate response from a superseded request");
                Ok(GenerateOutcome::Superseded)
            }
            Ok(batch) => {
                let mut added = 0;
                self.state.update_state(|s| added = s.prepend_batch(batch));
                info!(seq, count = added, "generated todos");
                Ok(GenerateOutcome::Applied(added))
            }
            Err(e) => {
                warn!(seq, error = %e, "generate failed");
                if !superseded {
                    self.state.update_state(|s| s.error = GENERATE_ERROR_MESSAGE.to_string());
                }
                Err(e)
            }
        }
    }

    /// Set `completed` on the server and adopt the returned item in place
    pub async fn toggle_complete(&self, id: &TaskId, completed: bool) -> ApiResult<()> {
        match self.api.set_completed(id, completed).await {
            Ok(updated) => {
                let mut applied = false;
                self.state.update_state(|s| applied = s.apply_update(id, updated));
                if !applied {
                    debug!(%id, "updated item is no longer in the list");
                }
                Ok(())
            }
            Err(e) => {
                warn!(%id, completed, error = %e, "toggle failed, item left unchanged");
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: &TaskId) -> ApiResult<()> {
        match self.api.delete_todo(id).await {
            Ok(()) => {
                self.state.update_state(|s| {
                    s.remove_item(id);
                });
                info!(%id, "deleted todo");
                Ok(())
            }
            Err(e) => {
                warn!(%id, error = %e, "delete failed, item left in place");
                Err(e)
            }
        }
    }
}
