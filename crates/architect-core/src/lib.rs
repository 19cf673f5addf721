// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Architect component generation client.
//!
//! This crate provides the conversation data model, the error taxonomy, and
//! the two seams the rest of the workspace plugs into: the remote
//! [`GenerationService`] and the [`ArtifactSink`] used for export and
//! clipboard side effects.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ArchitectError;
pub use traits::{ArtifactSink, GenerationService};
pub use types::{
    AttemptRecord, GenerationRequest, GenerationResult, ResultView, Role, SessionId, Turn,
    ValidationReport,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architect_error_has_all_variants() {
        let _invalid = ArchitectError::InvalidInput;
        let _in_flight = ArchitectError::RequestInFlight;
        let _empty = ArchitectError::EmptyLog;
        let _transport = ArchitectError::Transport {
            message: "test".into(),
            source: None,
        };
        let _service = ArchitectError::Service {
            status: 500,
            body: "boom".into(),
        };
        let _malformed = ArchitectError::MalformedResponse {
            message: "test".into(),
            source: None,
        };
        let _config = ArchitectError::Config("test".into());
        let _export = ArchitectError::Export {
            message: "test".into(),
            source: None,
        };
        let _internal = ArchitectError::Internal("test".into());
    }

    #[test]
    fn role_display_round_trip() {
        use std::str::FromStr;

        for role in [Role::User, Role::Assistant] {
            let s = role.to_string();
            assert_eq!(Role::from_str(&s).expect("should parse back"), role);
        }
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn all_traits_are_exported() {
        fn _assert_service<T: GenerationService>() {}
        fn _assert_sink<T: ArtifactSink>() {}
    }
}
