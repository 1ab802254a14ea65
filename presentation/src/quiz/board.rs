//! Quiz board: the loaded batch, the current filter and one quiz session

use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use petmatch_application::{CatalogView, PersonalityClassifier, QuizSession};
use petmatch_domain::{
    CategoryFilter, ClassificationReply, FilterQuery, PetRecord, QUIZ_CAPACITY, QuizPhase,
    ToggleOutcome, ViewMode,
};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Background classification started by a pick; `None` once cancelled
pub type PendingReply = JoinHandle<Option<ClassificationReply>>;

/// What the REPL should do after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print this and keep reading
    Show(String),
    /// Leave the quiz and show another view
    Switch(ViewMode),
    /// Exit without switching
    Quit,
}

pub const HELP: &str = "\
Commands:
  <number>           Pick or unpick the pet with that number
  /search <text>     Narrow the board by name or description (empty clears)
  /category <name>   Narrow the board by category (\"all\" clears)
  /categories        Show category options
  /list              Show the board
  /picks             Show current picks
  /dismiss           Close the result and go back to the home listing
  /help              Show this help
  /quit              Exit";

/// Input handling for the quiz, independent of the terminal
///
/// Filling the selection starts a classification in the background and
/// leaves its handle in [`QuizBoard::take_pending`]; input keeps flowing
/// while it runs, and [`QuizBoard::settle`] applies the reply.
pub struct QuizBoard<C: PersonalityClassifier + 'static> {
    view: CatalogView,
    query: FilterQuery,
    session: QuizSession<C>,
    formatter: ConsoleFormatter,
    pending: Option<PendingReply>,
}

impl<C: PersonalityClassifier + 'static> QuizBoard<C> {
    pub fn new(view: CatalogView, classifier: Arc<C>, formatter: ConsoleFormatter) -> Self {
        Self {
            view,
            query: FilterQuery::everything(),
            session: QuizSession::new(classifier),
            formatter,
            pending: None,
        }
    }

    pub fn session(&self) -> &QuizSession<C> {
        &self.session
    }

    /// Pets currently on the board, numbered from 1
    pub fn visible(&self) -> Vec<PetRecord> {
        self.view.visible(&self.query)
    }

    pub fn render(&self) -> String {
        let visible = self.visible();
        if visible.is_empty() {
            return ViewMode::Quiz.empty_message().to_string();
        }
        self.formatter
            .format_board(&visible, self.session.tracker().selection())
    }

    /// Hand over the classification started by the last pick, if any
    pub fn take_pending(&mut self) -> Option<PendingReply> {
        self.pending.take()
    }

    /// Apply a finished classification
    ///
    /// Returns the text to show, or `None` when the request was cancelled
    /// or its reply is stale.
    pub fn settle(&mut self, reply: Option<ClassificationReply>) -> Option<String> {
        if !self.session.resolve(reply?) {
            return None;
        }
        self.session.result().map(|personality| {
            format!(
                "{}\nType /dismiss to close the result.",
                self.formatter.format_personality(personality)
            )
        })
    }

    /// Handle one trimmed, non-empty line
    ///
    /// Must run inside a Tokio runtime: a pick that fills the selection
    /// spawns the classification.
    pub fn handle(&mut self, line: &str) -> Step {
        if let Some(command) = line.strip_prefix('/') {
            let (name, arg) = command
                .split_once(char::is_whitespace)
                .map(|(n, a)| (n, a.trim()))
                .unwrap_or((command, ""));
            return self.command(name, arg);
        }

        match line.parse::<usize>() {
            Ok(n) => self.pick(n),
            Err(_) => Step::Show(format!(
                "Type a pet number to pick it, or /help for commands ({line:?} not understood)"
            )),
        }
    }

    fn command(&mut self, name: &str, arg: &str) -> Step {
        match name {
            "quit" | "exit" | "q" => Step::Quit,
            "help" | "h" | "?" => Step::Show(HELP.to_string()),
            "list" | "ls" => Step::Show(self.render()),
            "search" => {
                self.query = self.query.clone().with_search(arg);
                Step::Show(self.render())
            }
            "category" => {
                let Ok(category) = arg.parse::<CategoryFilter>();
                self.query = self.query.clone().with_category(category);
                Step::Show(self.render())
            }
            "categories" => Step::Show(self.formatter.format_categories(&self.view.category_options())),
            "picks" => Step::Show(self.picks()),
            "dismiss" => {
                if self.session.phase() == QuizPhase::ResultReady {
                    let (next, _) = self.session.dismiss();
                    Step::Switch(next)
                } else {
                    Step::Show("There is no result to dismiss yet.".to_string())
                }
            }
            other => Step::Show(format!(
                "Unknown command: /{other}\nType /help for available commands"
            )),
        }
    }

    fn pick(&mut self, number: usize) -> Step {
        let visible = self.visible();
        let Some(pet) = number.checked_sub(1).and_then(|i| visible.get(i)) else {
            return Step::Show(format!("No pet numbered {number} on the board."));
        };

        let report = self.session.toggle(pet);
        let picked = self.session.tracker().selection().len();
        let message = match report.outcome {
            ToggleOutcome::Added => match report.request {
                Some(request) => {
                    self.pending = Some(self.session.spawn_classification(request));
                    format!(
                        "Picked {} ({picked}/{QUIZ_CAPACITY}). Reading your picks...",
                        pet.display_title()
                    )
                }
                None => format!("Picked {} ({picked}/{QUIZ_CAPACITY})", pet.display_title()),
            },
            ToggleOutcome::Removed => {
                format!("Unpicked {} ({picked}/{QUIZ_CAPACITY})", pet.display_title())
            }
            ToggleOutcome::IgnoredFull => {
                format!("You already have {QUIZ_CAPACITY} picks. Unpick one first.")
            }
            ToggleOutcome::Locked => "Dismiss the result first (/dismiss).".to_string(),
        };
        Step::Show(message)
    }

    fn picks(&self) -> String {
        let selection = self.session.tracker().selection();
        if selection.is_empty() {
            return "No picks yet.".to_string();
        }
        selection
            .items()
            .iter()
            .enumerate()
            .map(|(i, p)| format!("  {}. {} ({})", i + 1, p.display_title(), p.category))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use petmatch_application::CatalogError;
    use petmatch_domain::FALLBACK_PERSONALITY;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct FixedClassifier {
        reply: Result<String, CatalogError>,
        seen: Mutex<Vec<Vec<String>>>,
    }

    #[async_trait]
    impl PersonalityClassifier for FixedClassifier {
        async fn classify(&self, categories: &[String]) -> Result<String, CatalogError> {
            self.seen.lock().unwrap().push(categories.to_vec());
            self.reply.clone()
        }
    }

    /// Never answers; only cancellation ends its requests
    struct SilentClassifier;

    #[async_trait]
    impl PersonalityClassifier for SilentClassifier {
        async fn classify(&self, _categories: &[String]) -> Result<String, CatalogError> {
            std::future::pending().await
        }
    }

    fn seed() -> CatalogView {
        CatalogView::new(
            ViewMode::Quiz,
            vec![
                PetRecord::new("Buddy", "Dog"),
                PetRecord::new("Milo", "Cat"),
                PetRecord::new("Luna", "Dog"),
                PetRecord::new("Rex", "Dog"),
            ],
        )
    }

    fn board(reply: Result<String, CatalogError>) -> (QuizBoard<FixedClassifier>, Arc<FixedClassifier>) {
        colored::control::set_override(false);
        let classifier = Arc::new(FixedClassifier {
            reply,
            seen: Mutex::new(Vec::new()),
        });
        let board = QuizBoard::new(seed(), Arc::clone(&classifier), ConsoleFormatter::default());
        (board, classifier)
    }

    fn shown(step: Step) -> String {
        match step {
            Step::Show(text) => text,
            other => panic!("expected Show, got {other:?}"),
        }
    }

    async fn finish<C: PersonalityClassifier + 'static>(board: &mut QuizBoard<C>) -> Option<String> {
        let pending = board.take_pending().expect("a classification was started");
        let reply = pending.await.unwrap();
        board.settle(reply)
    }

    #[tokio::test]
    async fn test_third_pick_starts_classification_without_blocking() {
        let (mut board, classifier) = board(Ok("You are a people person.".into()));

        assert_eq!(shown(board.handle("1")), "Picked Buddy (1/3)");
        board.handle("2");
        assert!(board.take_pending().is_none());

        let picked = shown(board.handle("3"));
        assert!(picked.contains("Reading your picks"));
        assert_eq!(board.session().phase(), QuizPhase::ResultPending);

        let result = finish(&mut board).await.unwrap();
        assert!(result.contains("You are a people person."));
        assert_eq!(
            *classifier.seen.lock().unwrap(),
            vec![vec!["dog".to_string(), "cat".to_string(), "dog".to_string()]]
        );
    }

    #[tokio::test]
    async fn test_input_is_handled_while_classification_runs() {
        colored::control::set_override(false);
        let mut board = QuizBoard::new(seed(), Arc::new(SilentClassifier), ConsoleFormatter::default());
        for n in ["1", "2", "3"] {
            board.handle(n);
        }
        let pending = board.take_pending().unwrap();

        assert!(shown(board.handle("4")).contains("Unpick one first"));
        assert!(board.take_pending().is_none());

        // Unpicking cancels the outstanding request
        assert_eq!(shown(board.handle("2")), "Unpicked Milo (2/3)");
        let reply = pending.await.unwrap();
        assert!(reply.is_none());
        assert!(board.settle(reply).is_none());
        assert_eq!(board.session().phase(), QuizPhase::Partial);
    }

    #[tokio::test]
    async fn test_picks_locked_until_dismissed() {
        let (mut board, classifier) = board(Err(CatalogError::Timeout));
        for n in ["1", "2", "3"] {
            board.handle(n);
        }
        finish(&mut board).await;
        assert_eq!(
            board.session().result().map(|p| p.label.as_str()),
            Some(FALLBACK_PERSONALITY)
        );

        let locked = shown(board.handle("4"));
        assert!(locked.contains("/dismiss"));
        assert_eq!(classifier.seen.lock().unwrap().len(), 1);

        assert_eq!(board.handle("/dismiss"), Step::Switch(ViewMode::Home));
        assert!(board.session().tracker().selection().is_empty());
    }

    #[tokio::test]
    async fn test_reply_after_dismiss_is_not_shown() {
        let (mut board, _) = board(Ok("x".into()));
        for n in ["1", "2", "3"] {
            board.handle(n);
        }
        let pending = board.take_pending().unwrap();
        let reply = pending.await.unwrap();
        assert!(board.settle(reply.clone()).is_some());

        board.handle("/dismiss");
        assert!(board.settle(reply).is_none());
    }

    #[tokio::test]
    async fn test_numbers_follow_filtered_board() {
        let (mut board, _) = board(Ok("x".into()));
        board.handle("/category Cat");
        assert_eq!(shown(board.handle("1")), "Picked Milo (1/3)");
        assert_eq!(shown(board.handle("2")), "No pet numbered 2 on the board.");
    }

    #[tokio::test]
    async fn test_unpick_and_commands() {
        let (mut board, _) = board(Ok("x".into()));
        board.handle("1");
        assert_eq!(shown(board.handle("1")), "Unpicked Buddy (0/3)");
        assert_eq!(shown(board.handle("/picks")), "No picks yet.");
        assert!(shown(board.handle("/dismiss")).contains("no result"));
        assert!(shown(board.handle("/bogus")).contains("Unknown command"));
        assert_eq!(board.handle("/quit"), Step::Quit);
    }

    #[tokio::test]
    async fn test_search_narrows_board() {
        let (mut board, _) = board(Ok("x".into()));
        let listing = shown(board.handle("/search lu"));
        assert!(listing.contains("[1] Luna"));
        assert!(!listing.contains("Buddy"));
        board.handle("/search");
        assert_eq!(board.visible().len(), 4);
    }
}
