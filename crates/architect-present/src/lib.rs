// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure presentation helpers for generation results.
//!
//! Nothing here mutates session state: the presenter, highlighter and badge
//! are functions of a [`GenerationResult`](architect_core::GenerationResult),
//! and [`LocalSink`] is the only component with side effects.

pub mod badge;
pub mod export;
pub mod highlight;
pub mod presenter;
pub mod tokens;

pub use badge::{BadgeTier, IterationBadge};
pub use export::{export_text, LocalSink};
pub use highlight::{highlight, tokenize, Category, Language, Span};
pub use presenter::{present, AuditTrailView, AttemptSummary, Message, PresentationModel, Severity};
