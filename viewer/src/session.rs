//! Viewer session
//!
//! Holds the page state and runs submissions against the activity API.
//! Each submission takes a new generation; a response that arrives after a
//! newer submission has started is dropped instead of overwriting its state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::client::ActivitySource;
use crate::models::ActivityEnvelope;

pub const INPUT_REQUIRED_MESSAGE: &str = "Please enter both owner and repo name.";
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch repository data. Please check owner and repo.";

/// Everything the page renders
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub owner: String,
    pub repo: String,
    pub envelope: Option<ActivityEnvelope>,
    pub error: Option<String>,
    pub loading: bool,
}

pub struct ViewerSession<S>
where
    S: ActivitySource,
{
    source: Arc<S>,
    state: RwLock<ViewState>,
    generation: AtomicU64,
}

impl<S> ViewerSession<S>
where
    S: ActivitySource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: RwLock::new(ViewState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Copy of the current state for rendering
    pub fn snapshot(&self) -> ViewState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ViewState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up `owner/repo` and store the envelope or an error message.
    ///
    /// Empty inputs fail immediately without a request. Any failure of the
    /// request itself is reported with the same generic message. If the
    /// returned future is dropped mid-request, `loading` is still cleared.
    pub async fn submit(&self, owner: String, repo: String) {
        let generation = {
            let mut state = self.write_state();
            // Taken under the lock so generations follow lock order
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

            state.owner = owner.clone();
            state.repo = repo.clone();
            state.error = None;
            state.envelope = None;

            if owner.is_empty() || repo.is_empty() {
                // Also supersedes any submission still in flight
                state.error = Some(INPUT_REQUIRED_MESSAGE.to_string());
                state.loading = false;
                return;
            }

            state.loading = true;
            generation
        };

        let mut guard = InFlight {
            session: self,
            generation,
            armed: true,
        };
        let result = self.source.fetch_activity(&owner, &repo).await;
        guard.armed = false;
        drop(guard);

        let mut state = self.write_state();
        if !self.is_current(generation) {
            tracing::debug!(
                "Dropping stale response for {}/{} (generation {})",
                owner,
                repo,
                generation
            );
            return;
        }

        state.loading = false;
        match result {
            Ok(envelope) => state.envelope = Some(envelope),
            Err(e) => {
                tracing::warn!("Lookup of {}/{} failed: {:#}", owner, repo, e);
                state.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

/// Clears `loading` when a submission is abandoned before its response
/// arrives, e.g. because the browser disconnected.
struct InFlight<'a, S>
where
    S: ActivitySource,
{
    session: &'a ViewerSession<S>,
    generation: u64,
    armed: bool,
}

impl<S> Drop for InFlight<'_, S>
where
    S: ActivitySource,
{
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.session.write_state();
        if self.session.is_current(self.generation) {
            tracing::debug!("Submission {} cancelled", self.generation);
            state.loading = false;
        }
    }
}
