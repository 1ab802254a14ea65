//! Progress reporting for catalog requests

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use petmatch_application::{GalleryNotifier, Notice};
use petmatch_domain::ViewMode;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn stop(&self) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) {
            pb.finish_and_clear();
        }
    }

    fn view_label(view: ViewMode) -> &'static str {
        match view {
            ViewMode::Home => "pets",
            ViewMode::Favorites => "favorites",
            ViewMode::Quiz => "pets to pick from",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryNotifier for ProgressReporter {
    fn on_fetch_start(&self, view: ViewMode) {
        self.start(format!("Loading {}...", Self::view_label(view)));
    }

    fn on_fetch_complete(&self, _view: ViewMode, _count: usize, _success: bool) {
        self.stop();
    }

    fn on_notice(&self, notice: &Notice) {
        self.stop();
        eprintln!("{}", ConsoleFormatter::format_notice(notice));
    }
}

/// Prints notices only; used with `--quiet`
pub struct NoticeOnly;

impl GalleryNotifier for NoticeOnly {
    fn on_fetch_start(&self, _view: ViewMode) {}
    fn on_fetch_complete(&self, _view: ViewMode, _count: usize, _success: bool) {}

    fn on_notice(&self, notice: &Notice) {
        eprintln!("{}", ConsoleFormatter::format_notice(notice));
    }
}
