// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only conversation log with rollback of the last turn.
//!
//! The store holds at most one unanswered user turn. A user turn is
//! "pending" while it is the last entry in the log; appending the matching
//! assistant turn or rolling it back clears that state.

use architect_core::{ArchitectError, GenerationResult, SessionId, Turn};

/// Ordered turn log for one session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    session_id: SessionId,
    turns: Vec<Turn>,
    /// Index of the most recent assistant turn, materialized on write.
    latest_assistant: Option<usize>,
}

impl SessionStore {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            turns: Vec::new(),
            latest_assistant: None,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Appends a user prompt.
    ///
    /// Fails with [`ArchitectError::InvalidInput`] for blank text and with
    /// [`ArchitectError::RequestInFlight`] while a previous prompt is unanswered.
    pub fn append_user_turn(&mut self, prompt: &str) -> Result<(), ArchitectError> {
        if prompt.trim().is_empty() {
            return Err(ArchitectError::InvalidInput);
        }
        if self.is_pending() {
            return Err(ArchitectError::RequestInFlight);
        }
        self.turns.push(Turn::User {
            prompt: prompt.to_string(),
        });
        Ok(())
    }

    /// Appends the result answering the pending user turn.
    pub fn append_assistant_turn(&mut self, result: GenerationResult) -> Result<(), ArchitectError> {
        let prompt = match self.turns.last() {
            Some(Turn::User { prompt }) => prompt.clone(),
            _ => {
                return Err(ArchitectError::Internal(
                    "assistant turn appended without a pending prompt".into(),
                ));
            }
        };
        self.turns.push(Turn::Assistant {
            prompt,
            result: Box::new(result),
        });
        self.latest_assistant = Some(self.turns.len() - 1);
        Ok(())
    }

    /// Removes and returns the most recent turn.
    pub fn rollback_last_turn(&mut self) -> Result<Turn, ArchitectError> {
        let turn = self.turns.pop().ok_or(ArchitectError::EmptyLog)?;
        if self.latest_assistant == Some(self.turns.len()) {
            self.latest_assistant = self
                .turns
                .iter()
                .rposition(|t| matches!(t, Turn::Assistant { .. }));
        }
        Ok(turn)
    }

    /// Result of the most recent assistant turn, if any.
    pub fn latest_assistant_result(&self) -> Option<&GenerationResult> {
        self.latest_assistant
            .and_then(|idx| self.turns.get(idx))
            .and_then(Turn::result)
    }

    /// True while the last turn is a user prompt awaiting its result.
    pub fn is_pending(&self) -> bool {
        matches!(self.turns.last(), Some(Turn::User { .. }))
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn user_turn_count(&self) -> usize {
        self.turns
            .iter()
            .filter(|t| matches!(t, Turn::User { .. }))
            .count()
    }

    pub fn assistant_turn_count(&self) -> usize {
        self.turns.len() - self.user_turn_count()
    }
}
