use std::collections::HashSet;
use std::time::{Duration, Instant};

/// How long the "Copied!" confirmation stays on a snippet's copy button.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Which subcategory sections are currently open. Starts all-collapsed and
/// is touched only by explicit toggles; searching never expands or collapses
/// anything.
#[derive(Default)]
pub struct ExpansionState {
    expanded: HashSet<&'static str>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, subcategory_id: &str) -> bool {
        self.expanded.contains(subcategory_id)
    }

    pub fn toggle(&mut self, subcategory_id: &'static str) {
        if !self.expanded.remove(subcategory_id) {
            self.expanded.insert(subcategory_id);
        }
    }
}

/// Copy confirmation as an explicit state machine with a stored deadline.
/// A new copy replaces the whole state, deadline included, so an old
/// deadline can never clear a newer confirmation.
#[derive(Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Showing {
        snippet_id: &'static str,
        expires_at: Instant,
    },
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_copied(&mut self, snippet_id: &'static str, now: Instant) {
        *self = CopyFeedback::Showing {
            snippet_id,
            expires_at: now + COPY_FEEDBACK_DURATION,
        };
    }

    /// Drops the confirmation once its deadline has passed. Called once per
    /// frame.
    pub fn tick(&mut self, now: Instant) {
        if let CopyFeedback::Showing { expires_at, .. } = self {
            if now >= *expires_at {
                *self = CopyFeedback::Idle;
            }
        }
    }

    pub fn copied_id(&self) -> Option<&'static str> {
        match self {
            CopyFeedback::Idle => None,
            CopyFeedback::Showing { snippet_id, .. } => Some(snippet_id),
        }
    }

    /// Deadline of the active confirmation, used to schedule a repaint so the
    /// label clears without further input.
    pub fn expires_at(&self) -> Option<Instant> {
        match self {
            CopyFeedback::Idle => None,
            CopyFeedback::Showing { expires_at, .. } => Some(*expires_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = ExpansionState::new();
        assert!(!state.is_expanded("hooks"));
        state.toggle("hooks");
        assert!(state.is_expanded("hooks"));
        state.toggle("hooks");
        assert!(!state.is_expanded("hooks"));
    }

    #[test]
    fn toggle_twice_is_identity_from_any_starting_state() {
        let mut state = ExpansionState::new();
        state.toggle("already-open");
        state.toggle("hooks");
        state.toggle("hooks");
        assert!(!state.is_expanded("hooks"));
        state.toggle("already-open");
        state.toggle("already-open");
        assert!(state.is_expanded("already-open"));
    }

    #[test]
    fn toggling_one_section_leaves_others_alone() {
        let mut state = ExpansionState::new();
        state.toggle("hooks");
        state.toggle("composition-api");
        state.toggle("hooks");
        assert!(!state.is_expanded("hooks"));
        assert!(state.is_expanded("composition-api"));
    }

    #[test]
    fn expansion_survives_search_changes() {
        use crate::catalog::{filter_library, LIBRARY};

        let mut state = ExpansionState::new();
        state.toggle("modern-hooks");
        // Deriving filtered views never touches expansion state, even when
        // the expanded section drops out of the results.
        let _ = filter_library(LIBRARY, "react");
        let _ = filter_library(LIBRARY, "zzz-no-match");
        let _ = filter_library(LIBRARY, "");
        assert!(state.is_expanded("modern-hooks"));
    }

    #[test]
    fn copy_feedback_lifecycle() {
        let now = Instant::now();
        let mut feedback = CopyFeedback::new();
        assert_eq!(feedback.copied_id(), None);

        feedback.mark_copied("snippet-a", now);
        assert_eq!(feedback.copied_id(), Some("snippet-a"));

        // Still showing just before the deadline.
        feedback.tick(now + COPY_FEEDBACK_DURATION - Duration::from_millis(1));
        assert_eq!(feedback.copied_id(), Some("snippet-a"));

        feedback.tick(now + COPY_FEEDBACK_DURATION);
        assert_eq!(feedback.copied_id(), None);
    }

    #[test]
    fn second_copy_replaces_the_first() {
        let now = Instant::now();
        let mut feedback = CopyFeedback::new();
        feedback.mark_copied("snippet-a", now);
        feedback.mark_copied("snippet-b", now + Duration::from_millis(500));
        assert_eq!(feedback.copied_id(), Some("snippet-b"));
    }

    #[test]
    fn stale_deadline_cannot_clear_a_newer_confirmation() {
        let now = Instant::now();
        let mut feedback = CopyFeedback::new();
        feedback.mark_copied("snippet-a", now);
        feedback.mark_copied("snippet-b", now + Duration::from_secs(1));

        // When A's original deadline passes, B must stay visible.
        feedback.tick(now + COPY_FEEDBACK_DURATION);
        assert_eq!(feedback.copied_id(), Some("snippet-b"));

        // B clears at its own deadline.
        feedback.tick(now + Duration::from_secs(1) + COPY_FEEDBACK_DURATION);
        assert_eq!(feedback.copied_id(), None);
    }

    #[test]
    fn ticking_while_idle_is_a_no_op() {
        let mut feedback = CopyFeedback::new();
        feedback.tick(Instant::now());
        assert_eq!(feedback.copied_id(), None);
    }
}
