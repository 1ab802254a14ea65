//! Gallery notification port
//!
//! Defines the interface for surfacing loading state and notices.

use petmatch_domain::ViewMode;

/// Transient, non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Warning(m) | Notice::Failure(m) => m,
        }
    }
}

/// Callback for progress updates while the gallery talks to the catalog
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait GalleryNotifier: Send + Sync {
    /// Called when a listing fetch starts
    fn on_fetch_start(&self, view: ViewMode);

    /// Called when a listing fetch finishes
    fn on_fetch_complete(&self, view: ViewMode, count: usize, success: bool);

    /// Called for transient feedback after an action
    fn on_notice(&self, _notice: &Notice) {}
}

/// No-op notifier for when progress reporting is not needed
pub struct NoNotifier;

impl GalleryNotifier for NoNotifier {
    fn on_fetch_start(&self, _view: ViewMode) {}
    fn on_fetch_complete(&self, _view: ViewMode, _count: usize, _success: bool) {}
}
