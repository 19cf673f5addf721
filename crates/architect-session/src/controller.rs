// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-flight generation controller.
//!
//! Each user action drives one cycle: `Idle -> Pending -> {Committed,
//! RolledBack} -> Idle`. The store lock is never held across the network
//! call, so a second `submit` during that call observes `Pending` and is
//! rejected instead of racing the first one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use architect_core::{
    ArchitectError, GenerationRequest, GenerationResult, GenerationService, ResultView, SessionId,
    Turn,
};
use tokio::sync::{watch, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::selector;
use crate::store::SessionStore;

/// Message surfaced when an in-flight cycle is dropped before it resolves.
const CANCELLED_MESSAGE: &str = "generation cancelled before the service answered";

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No request outstanding.
    Idle,
    /// A request is in flight.
    Pending,
    /// The last response was appended to the log.
    Committed,
    /// The last request failed and its prompt was removed.
    RolledBack,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Pending => write!(f, "pending"),
            Phase::Committed => write!(f, "committed"),
            Phase::RolledBack => write!(f, "rolled back"),
        }
    }
}

/// How a generation cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Committed,
    RolledBack { error: String },
}

/// Everything a renderer needs, cloned out from under the lock.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub turns: Vec<Turn>,
    pub phase: Phase,
    pub error: Option<String>,
    pub view: ResultView,
    pub current: Option<GenerationResult>,
}

struct ControllerState {
    store: SessionStore,
    /// Human-readable description of the last failure; cleared on the next submit.
    error: Option<String>,
    last_outcome: Option<CycleOutcome>,
    view: ResultView,
}

/// Drives generation cycles against a [`GenerationService`] and is the only
/// writer of the session's turn log.
pub struct GenerationController {
    service: Arc<dyn GenerationService>,
    session_id: SessionId,
    state: Mutex<ControllerState>,
    phase: watch::Sender<Phase>,
    /// Set when a dropped cycle could not take the lock; its prompt is
    /// removed by whoever locks the state next.
    cancel_pending: AtomicBool,
}

impl GenerationController {
    /// Creates a controller with a freshly generated session id.
    pub fn new(service: Arc<dyn GenerationService>) -> Self {
        Self::with_session_id(service, SessionId::generate())
    }

    pub fn with_session_id(service: Arc<dyn GenerationService>, session_id: SessionId) -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self {
            service,
            state: Mutex::new(ControllerState {
                store: SessionStore::new(session_id.clone()),
                error: None,
                last_outcome: None,
                view: ResultView::default(),
            }),
            session_id,
            phase,
            cancel_pending: AtomicBool::new(false),
        }
    }

    /// Runs one generation cycle for `prompt`.
    ///
    /// Returns `Err` only for the two rejections ([`ArchitectError::InvalidInput`],
    /// [`ArchitectError::RequestInFlight`]), which leave every piece of state
    /// untouched. Service failures are absorbed: the prompt is rolled back,
    /// the message is surfaced through [`error`](Self::error), and the
    /// outcome is [`CycleOutcome::RolledBack`].
    pub async fn submit(&self, prompt: &str) -> Result<CycleOutcome, ArchitectError> {
        let request = self.begin(prompt).await?;
        let guard = PendingGuard {
            controller: self,
            armed: true,
        };

        let started = Instant::now();
        debug!(
            session_id = %self.session_id,
            service = self.service.name(),
            "dispatching generation request"
        );
        let response = self.service.generate(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        Ok(self.finish(guard, response, elapsed_ms).await)
    }

    async fn begin(&self, prompt: &str) -> Result<GenerationRequest, ArchitectError> {
        if prompt.trim().is_empty() {
            debug!("submit ignored: blank prompt");
            return Err(ArchitectError::InvalidInput);
        }

        let mut state = self.lock_state().await;
        if *self.phase.borrow() == Phase::Pending {
            debug!("submit ignored: request already in flight");
            return Err(ArchitectError::RequestInFlight);
        }

        state.store.append_user_turn(prompt)?;
        state.error = None;
        self.transition(Phase::Pending);

        Ok(GenerationRequest {
            prompt: prompt.to_string(),
            session_id: self.session_id.clone(),
        })
    }

    async fn finish(
        &self,
        mut guard: PendingGuard<'_>,
        response: Result<GenerationResult, ArchitectError>,
        elapsed_ms: u64,
    ) -> CycleOutcome {
        let mut state = self.lock_state().await;
        guard.armed = false;

        let outcome = match response {
            Ok(result) => {
                let iterations = result.iteration_count;
                let success = result.success;
                match state.store.append_assistant_turn(result) {
                    Ok(()) => {
                        state.view = ResultView::default();
                        info!(
                            session_id = %self.session_id,
                            iterations,
                            success,
                            elapsed_ms,
                            turns = state.store.len(),
                            "generation committed"
                        );
                        CycleOutcome::Committed
                    }
                    Err(e) => self.roll_back(&mut state, e),
                }
            }
            Err(e) => self.roll_back(&mut state, e),
        };

        self.transition(match outcome {
            CycleOutcome::Committed => Phase::Committed,
            CycleOutcome::RolledBack { .. } => Phase::RolledBack,
        });
        state.last_outcome = Some(outcome.clone());
        self.transition(Phase::Idle);

        outcome
    }

    fn roll_back(&self, state: &mut ControllerState, error: ArchitectError) -> CycleOutcome {
        let message = error.to_string();
        warn!(
            session_id = %self.session_id,
            error = %message,
            "generation failed, rolling back prompt"
        );
        if state.store.is_pending()
            && let Err(e) = state.store.rollback_last_turn()
        {
            warn!(error = %e, "rollback of failed prompt did not apply");
        }
        state.error = Some(message.clone());
        CycleOutcome::RolledBack { error: message }
    }

    /// Locks the state, first discarding any cycle that was dropped while
    /// the lock was held elsewhere.
    async fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        let mut state = self.state.lock().await;
        if self.cancel_pending.swap(false, Ordering::AcqRel) {
            debug!(session_id = %self.session_id, "discarding cancelled prompt");
            discard_cancelled(&mut state);
        }
        state
    }

    fn transition(&self, next: Phase) {
        let previous = self.phase.send_replace(next);
        debug!(from = %previous, to = %next, "controller phase");
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Current phase; `Idle` or `Pending` between calls.
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Receiver notified on every phase change (for spinners and the like).
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Message of the last failed cycle, until the next submit.
    pub async fn error(&self) -> Option<String> {
        self.lock_state().await.error.clone()
    }

    pub async fn last_outcome(&self) -> Option<CycleOutcome> {
        self.lock_state().await.last_outcome.clone()
    }

    pub async fn turns(&self) -> Vec<Turn> {
        self.lock_state().await.store.turns().to_vec()
    }

    pub async fn turn_count(&self) -> usize {
        self.lock_state().await.store.len()
    }

    /// The latest committed result, reflecting a commit as soon as `submit` returns.
    pub async fn current_result(&self) -> Option<GenerationResult> {
        let state = self.lock_state().await;
        selector::current_result(&state.store).cloned()
    }

    pub async fn selected_view(&self) -> ResultView {
        self.lock_state().await.view
    }

    pub async fn select_view(&self, view: ResultView) {
        self.lock_state().await.view = view;
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock_state().await;
        SessionSnapshot {
            session_id: self.session_id.clone(),
            turns: state.store.turns().to_vec(),
            phase: self.phase(),
            error: state.error.clone(),
            view: state.view,
            current: selector::current_result(&state.store).cloned(),
        }
    }
}

/// Rolls the pending prompt back if a `submit` future is dropped mid-flight.
struct PendingGuard<'a> {
    controller: &'a GenerationController,
    armed: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let controller = self.controller;
        match controller.state.try_lock() {
            Ok(mut state) => discard_cancelled(&mut state),
            Err(_) => {
                controller.cancel_pending.store(true, Ordering::Release);
                debug!(
                    session_id = %controller.session_id,
                    "session locked during cancellation, rollback deferred"
                );
            }
        }
        controller.transition(Phase::RolledBack);
        controller.transition(Phase::Idle);
        warn!(session_id = %controller.session_id, "in-flight generation dropped");
    }
}

fn discard_cancelled(state: &mut ControllerState) {
    if state.store.is_pending() {
        let _ = state.store.rollback_last_turn();
    }
    state.error = Some(CANCELLED_MESSAGE.to_string());
    state.last_outcome = Some(CycleOutcome::RolledBack {
        error: CANCELLED_MESSAGE.to_string(),
    });
}
