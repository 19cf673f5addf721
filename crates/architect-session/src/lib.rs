// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation state for one Architect session.
//!
//! [`SessionStore`] owns the ordered turn log, [`GenerationController`] is its
//! single writer and drives one generation cycle at a time, and the
//! [`selector`] functions derive the result currently on display.

pub mod controller;
pub mod selector;
pub mod store;

pub use controller::{CycleOutcome, GenerationController, Phase, SessionSnapshot};
pub use store::SessionStore;
