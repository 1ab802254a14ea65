//! Play Quiz use case
//!
//! Drives a [`QuizTracker`] against a [`PersonalityClassifier`]. Picks are
//! synchronous; only filling the selection goes out to the classifier.
//!
//! [`QuizSession::spawn_classification`] runs the request on a Tokio task so
//! the caller can keep handling input. The reply is applied later with
//! [`QuizSession::resolve`], and is dropped if the round moved on.
//!
//! In-flight requests carry a [`CancellationToken`]; dismissing the result
//! or deselecting while a request is pending cancels it.

use crate::ports::classifier::PersonalityClassifier;
use petmatch_domain::{
    ClassificationReply, ClassificationRequest, Personality, PetRecord, QuizPhase, QuizTracker,
    ToggleOutcome, ToggleReport, ViewMode,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Run one classification request, honoring cancellation
///
/// Returns `None` if the token fired before the classifier answered.
async fn run_classification<C: PersonalityClassifier + ?Sized>(
    classifier: &C,
    request: ClassificationRequest,
    token: CancellationToken,
) -> Option<ClassificationReply> {
    let epoch = request.epoch;
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("Classification {} cancelled", epoch);
            None
        }
        result = classifier.classify(&request.categories) => Some(match result {
            Ok(label) => ClassificationReply::success(epoch, label),
            Err(e) => {
                warn!("Failed to fetch personality: {}", e);
                ClassificationReply::failure(epoch, e.to_string())
            }
        }),
    }
}

/// One quiz round bound to a classifier
pub struct QuizSession<C: PersonalityClassifier + 'static> {
    classifier: Arc<C>,
    tracker: QuizTracker,
    in_flight: Option<CancellationToken>,
}

impl<C: PersonalityClassifier + 'static> QuizSession<C> {
    pub fn new(classifier: Arc<C>) -> Self {
        Self {
            classifier,
            tracker: QuizTracker::new(),
            in_flight: None,
        }
    }

    pub fn tracker(&self) -> &QuizTracker {
        &self.tracker
    }

    pub fn phase(&self) -> QuizPhase {
        self.tracker.phase()
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Toggle a pet without running any classification
    ///
    /// If the report carries a request, the caller owns dispatching it.
    pub fn toggle(&mut self, pet: &PetRecord) -> ToggleReport {
        let report = self.tracker.toggle(pet);
        if report.outcome == ToggleOutcome::Removed {
            self.cancel_in_flight();
        }
        debug!(
            "Toggled {} -> {:?} ({}/{})",
            pet.key(),
            report.outcome,
            self.tracker.selection().len(),
            petmatch_domain::QUIZ_CAPACITY
        );
        report
    }

    /// Dispatch `request` on a background task
    ///
    /// The returned handle yields `None` if the request was cancelled.
    pub fn spawn_classification(
        &mut self,
        request: ClassificationRequest,
    ) -> JoinHandle<Option<ClassificationReply>> {
        info!("Selection complete, classifying {:?}", request.categories);
        self.cancel_in_flight();
        self.tracker.mark_dispatched(&request);

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        let classifier = Arc::clone(&self.classifier);

        tokio::spawn(async move { run_classification(classifier.as_ref(), request, token).await })
    }

    /// Apply a reply; returns `false` if it was stale and dropped
    pub fn resolve(&mut self, reply: ClassificationReply) -> bool {
        let epoch = reply.epoch;
        let applied = self.tracker.resolve(reply);
        if applied {
            self.in_flight = None;
        } else {
            debug!("Discarded stale classification reply {}", epoch);
        }
        applied
    }

    pub fn result(&self) -> Option<&Personality> {
        self.tracker.result()
    }

    /// Close the result surface, reset the round and leave quiz mode
    ///
    /// Returns the view to switch to and the result that was shown.
    pub fn dismiss(&mut self) -> (ViewMode, Option<Personality>) {
        self.cancel_in_flight();
        let shown = self.tracker.dismiss();
        (ViewMode::Home, shown)
    }
}
