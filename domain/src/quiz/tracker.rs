//! Quiz round state machine
//!
//! ```text
//!   Empty ──add──▶ Partial ──3rd add──▶ Full ──dispatch──▶ ResultPending
//!     ▲              │  ▲                 │                    │
//!     │           remove│                remove               reply
//!     │              ▼  └─────────────────┘                    ▼
//!     └───────────────────────── dismiss ◀──────────────── ResultReady
//! ```
//!
//! Reaching capacity is edge-triggered: the `Partial → Full` transition
//! emits one [`ClassificationRequest`], stamped with a fresh [`Epoch`].
//! Replies are applied only while the tracker is still waiting on that
//! epoch; anything else is a stale reply and is dropped.

use super::personality::Personality;
use super::selection::{SelectionSet, ToggleOutcome};
use crate::pet::entities::PetRecord;
use serde::{Deserialize, Serialize};

/// Generation counter for classification requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Epoch(u64);

impl Epoch {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Observable state of a quiz round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    Empty,
    Partial,
    Full,
    ResultPending,
    ResultReady,
}

impl QuizPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizPhase::Empty => "empty",
            QuizPhase::Partial => "partial",
            QuizPhase::Full => "full",
            QuizPhase::ResultPending => "result_pending",
            QuizPhase::ResultReady => "result_ready",
        }
    }
}

/// Classification work emitted when the selection fills up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    pub epoch: Epoch,
    /// Lower-cased categories in selection order
    pub categories: Vec<String>,
}

/// Answer to a [`ClassificationRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationReply {
    pub epoch: Epoch,
    pub outcome: Result<String, String>,
}

impl ClassificationReply {
    pub fn success(epoch: Epoch, label: impl Into<String>) -> Self {
        Self {
            epoch,
            outcome: Ok(label.into()),
        }
    }

    pub fn failure(epoch: Epoch, reason: impl Into<String>) -> Self {
        Self {
            epoch,
            outcome: Err(reason.into()),
        }
    }
}

/// Result of one [`QuizTracker::toggle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleReport {
    pub outcome: ToggleOutcome,
    pub phase: QuizPhase,
    /// Present only on the `Partial → Full` edge
    pub request: Option<ClassificationRequest>,
}

/// Tracks one quiz round: the selection, the in-flight request, the result
#[derive(Debug, Clone)]
pub struct QuizTracker {
    selection: SelectionSet,
    phase: QuizPhase,
    epoch: u64,
    awaiting: Option<Epoch>,
    result: Option<Personality>,
}

impl Default for QuizTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizTracker {
    pub fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
            phase: QuizPhase::Empty,
            epoch: 0,
            awaiting: None,
            result: None,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn result(&self) -> Option<&Personality> {
        self.result.as_ref()
    }

    /// Epoch of the request currently awaited, if any
    pub fn awaiting(&self) -> Option<Epoch> {
        self.awaiting
    }

    fn phase_for_len(&self) -> QuizPhase {
        match self.selection.len() {
            0 => QuizPhase::Empty,
            n if n < super::selection::QUIZ_CAPACITY => QuizPhase::Partial,
            _ => QuizPhase::Full,
        }
    }

    /// Toggle a pet in or out of the selection
    pub fn toggle(&mut self, candidate: &PetRecord) -> ToggleReport {
        if self.phase == QuizPhase::ResultReady {
            return ToggleReport {
                outcome: ToggleOutcome::Locked,
                phase: self.phase,
                request: None,
            };
        }

        let outcome = self.selection.toggle(candidate);
        let mut request = None;

        match outcome {
            ToggleOutcome::Added => {
                self.phase = self.phase_for_len();
                if self.phase == QuizPhase::Full {
                    self.epoch += 1;
                    let epoch = Epoch(self.epoch);
                    self.awaiting = Some(epoch);
                    request = Some(ClassificationRequest {
                        epoch,
                        categories: self.selection.categories(),
                    });
                }
            }
            ToggleOutcome::Removed => {
                // Whatever was in flight belongs to a selection that no longer exists
                self.awaiting = None;
                self.phase = self.phase_for_len();
            }
            ToggleOutcome::IgnoredFull | ToggleOutcome::Locked => {}
        }

        ToggleReport {
            outcome,
            phase: self.phase,
            request,
        }
    }

    /// Record that `request` has been handed to a classifier
    pub fn mark_dispatched(&mut self, request: &ClassificationRequest) {
        if self.phase == QuizPhase::Full && self.awaiting == Some(request.epoch) {
            self.phase = QuizPhase::ResultPending;
        }
    }

    /// Apply a reply; returns `false` when the reply is stale and was dropped
    pub fn resolve(&mut self, reply: ClassificationReply) -> bool {
        let live = matches!(self.phase, QuizPhase::Full | QuizPhase::ResultPending)
            && self.awaiting == Some(reply.epoch);
        if !live {
            return false;
        }

        self.result = Some(match reply.outcome {
            Ok(label) => Personality::new(label),
            Err(_) => Personality::fallback(),
        });
        self.awaiting = None;
        self.phase = QuizPhase::ResultReady;
        true
    }

    /// Close the result and start over with an empty selection
    ///
    /// Returns the result that was on screen, if any.
    pub fn dismiss(&mut self) -> Option<Personality> {
        self.selection.clear();
        self.awaiting = None;
        self.epoch += 1;
        self.phase = QuizPhase::Empty;
        self.result.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::personality::FALLBACK_PERSONALITY;

    fn pet(n: u32, category: &str) -> PetRecord {
        PetRecord::new(format!("pet-{n}"), category).with_id(n.to_string())
    }

    fn fill(tracker: &mut QuizTracker) -> ClassificationRequest {
        assert!(tracker.toggle(&pet(1, "Dog")).request.is_none());
        assert!(tracker.toggle(&pet(2, "Cat")).request.is_none());
        tracker
            .toggle(&pet(3, "Dog"))
            .request
            .expect("third pick fires")
    }

    #[test]
    fn test_phases_through_a_round() {
        let mut tracker = QuizTracker::new();
        assert_eq!(tracker.phase(), QuizPhase::Empty);
        assert_eq!(tracker.toggle(&pet(1, "Dog")).phase, QuizPhase::Partial);
        assert_eq!(tracker.toggle(&pet(2, "Dog")).phase, QuizPhase::Partial);
        let report = tracker.toggle(&pet(3, "Dog"));
        assert_eq!(report.phase, QuizPhase::Full);

        let request = report.request.unwrap();
        tracker.mark_dispatched(&request);
        assert_eq!(tracker.phase(), QuizPhase::ResultPending);

        assert!(tracker.resolve(ClassificationReply::success(request.epoch, "Adventurer")));
        assert_eq!(tracker.phase(), QuizPhase::ResultReady);
        assert_eq!(tracker.result().unwrap().label, "Adventurer");

        let shown = tracker.dismiss();
        assert_eq!(shown.unwrap().label, "Adventurer");
        assert_eq!(tracker.phase(), QuizPhase::Empty);
        assert!(tracker.selection().is_empty());
    }

    #[test]
    fn test_request_carries_lowercased_categories_in_order() {
        let mut tracker = QuizTracker::new();
        let request = fill(&mut tracker);
        assert_eq!(request.categories, vec!["dog", "cat", "dog"]);
    }

    #[test]
    fn test_fourth_pick_while_full_is_ignored() {
        let mut tracker = QuizTracker::new();
        fill(&mut tracker);
        let report = tracker.toggle(&pet(4, "Cat"));
        assert_eq!(report.outcome, ToggleOutcome::IgnoredFull);
        assert!(report.request.is_none());
        let keys: Vec<_> = tracker
            .selection()
            .items()
            .iter()
            .map(|p| p.key().to_string())
            .collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_fourth_pick_while_pending_is_ignored() {
        let mut tracker = QuizTracker::new();
        let request = fill(&mut tracker);
        tracker.mark_dispatched(&request);
        assert_eq!(tracker.phase(), QuizPhase::ResultPending);

        let report = tracker.toggle(&pet(4, "Cat"));
        assert_eq!(report.outcome, ToggleOutcome::IgnoredFull);
        assert!(report.request.is_none());
        assert_eq!(report.phase, QuizPhase::ResultPending);
        assert_eq!(tracker.awaiting(), Some(request.epoch));
        assert_eq!(tracker.selection().len(), 3);

        // The original request is still the live one
        assert!(tracker.resolve(ClassificationReply::success(request.epoch, "Calm")));
    }

    #[test]
    fn test_refill_fires_again_with_new_epoch() {
        let mut tracker = QuizTracker::new();
        let first = fill(&mut tracker);

        assert_eq!(tracker.toggle(&pet(2, "Cat")).phase, QuizPhase::Partial);
        let second = tracker
            .toggle(&pet(5, "Cat"))
            .request
            .expect("refill fires");
        assert_ne!(first.epoch, second.epoch);
        assert_eq!(second.categories, vec!["dog", "dog", "cat"]);
    }

    #[test]
    fn test_failure_resolves_to_fallback() {
        let mut tracker = QuizTracker::new();
        let request = fill(&mut tracker);
        tracker.mark_dispatched(&request);
        assert!(tracker.resolve(ClassificationReply::failure(request.epoch, "503")));
        let result = tracker.result().unwrap();
        assert!(result.is_fallback);
        assert_eq!(result.label, FALLBACK_PERSONALITY);
        assert_eq!(tracker.phase(), QuizPhase::ResultReady);
    }

    #[test]
    fn test_stale_reply_after_dismiss_is_dropped() {
        let mut tracker = QuizTracker::new();
        let request = fill(&mut tracker);
        tracker.mark_dispatched(&request);
        tracker.dismiss();

        assert!(!tracker.resolve(ClassificationReply::success(request.epoch, "late")));
        assert_eq!(tracker.phase(), QuizPhase::Empty);
        assert!(tracker.result().is_none());
    }

    #[test]
    fn test_stale_reply_after_refill_is_dropped() {
        let mut tracker = QuizTracker::new();
        let first = fill(&mut tracker);
        tracker.mark_dispatched(&first);
        tracker.toggle(&pet(3, "Dog"));
        let second = tracker.toggle(&pet(6, "Cat")).request.unwrap();
        tracker.mark_dispatched(&second);

        assert!(!tracker.resolve(ClassificationReply::success(first.epoch, "old")));
        assert_eq!(tracker.phase(), QuizPhase::ResultPending);
        assert!(tracker.resolve(ClassificationReply::success(second.epoch, "new")));
        assert_eq!(tracker.result().unwrap().label, "new");
    }

    #[test]
    fn test_deselect_while_pending_drops_reply() {
        let mut tracker = QuizTracker::new();
        let request = fill(&mut tracker);
        tracker.mark_dispatched(&request);
        tracker.toggle(&pet(1, "Dog"));
        assert!(tracker.awaiting().is_none());
        assert!(!tracker.resolve(ClassificationReply::success(request.epoch, "x")));
        assert_eq!(tracker.phase(), QuizPhase::Partial);
    }

    #[test]
    fn test_toggle_locked_while_result_shown() {
        let mut tracker = QuizTracker::new();
        let request = fill(&mut tracker);
        tracker.resolve(ClassificationReply::success(request.epoch, "ok"));
        let report = tracker.toggle(&pet(1, "Dog"));
        assert_eq!(report.outcome, ToggleOutcome::Locked);
        assert_eq!(tracker.selection().len(), 3);
    }

    #[test]
    fn test_dismiss_after_fallback_resets() {
        let mut tracker = QuizTracker::new();
        let request = fill(&mut tracker);
        tracker.resolve(ClassificationReply::failure(request.epoch, "boom"));
        assert!(tracker.dismiss().unwrap().is_fallback);
        assert_eq!(tracker.phase(), QuizPhase::Empty);
        assert!(fill(&mut tracker).epoch > request.epoch);
    }
}
