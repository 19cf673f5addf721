// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only views over the turn log.

use architect_core::GenerationResult;

use crate::store::SessionStore;

/// The result shown in the output panel: the latest committed one.
///
/// Independent of which turn the history view is scrolled to.
pub fn current_result(store: &SessionStore) -> Option<&GenerationResult> {
    store.latest_assistant_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::SessionId;
    use architect_test_utils::fixtures;

    #[test]
    fn current_tracks_latest_commit() {
        let mut store = SessionStore::new(SessionId::generate());
        assert!(current_result(&store).is_none());

        let first = fixtures::result_with_template("<p>one</p>");
        let second = fixtures::result_with_template("<p>two</p>");
        store.append_user_turn("one").unwrap();
        store.append_assistant_turn(first.clone()).unwrap();
        assert_eq!(current_result(&store), Some(&first));

        store.append_user_turn("two").unwrap();
        // A pending prompt does not hide the previous result.
        assert_eq!(current_result(&store), Some(&first));

        store.append_assistant_turn(second.clone()).unwrap();
        assert_eq!(current_result(&store), Some(&second));

        store.append_user_turn("three").unwrap();
        store.rollback_last_turn().unwrap();
        assert_eq!(current_result(&store), Some(&second));
    }
}
