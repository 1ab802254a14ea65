//! REPL (Read-Eval-Print Loop) for the personality quiz
//!
//! rustyline blocks, so the editor lives on a blocking task and hands lines
//! over a channel. The loop selects between the next line and the running
//! classification, which keeps the board responsive while a result is pending.

use super::board::{HELP, PendingReply, QuizBoard, Step};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use petmatch_application::{
    BrowseCatalogUseCase, GalleryNotifier, NoNotifier, PersonalityClassifier, PetCatalogService,
};
use petmatch_domain::{ClassificationReply, ViewMode};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::{Arc, mpsc as std_mpsc};
use tokio::sync::mpsc;
use tokio::task::JoinError;
use tracing::{debug, warn};

/// What the reader thread saw
#[derive(Debug)]
enum InputEvent {
    Line(String),
    Interrupted,
    Eof,
    Failed(String),
}

/// Interactive quiz REPL
pub struct QuizRepl<S: PetCatalogService + 'static, C: PersonalityClassifier + 'static> {
    browse: BrowseCatalogUseCase<S>,
    classifier: Arc<C>,
    description_width: usize,
    show_progress: bool,
}

impl<S: PetCatalogService + 'static, C: PersonalityClassifier + 'static> QuizRepl<S, C> {
    /// Create a new QuizRepl
    pub fn new(service: Arc<S>, classifier: Arc<C>) -> Self {
        Self {
            browse: BrowseCatalogUseCase::new(service),
            classifier,
            description_width: 60,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_description_width(mut self, width: usize) -> Self {
        self.description_width = width;
        self
    }

    /// Run the interactive REPL
    ///
    /// Returns the view to show next when the player dismisses a result.
    pub async fn run(&self) -> RlResult<Option<ViewMode>> {
        let progress: Box<dyn GalleryNotifier> = if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoNotifier)
        };

        let view = match self
            .browse
            .load_with_progress(ViewMode::Quiz, progress.as_ref())
            .await
        {
            Ok(view) => view,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(None);
            }
        };

        let mut board = QuizBoard::new(
            view,
            Arc::clone(&self.classifier),
            ConsoleFormatter::new(self.description_width),
        );

        let history_path = dirs::data_dir().map(|p| p.join("petmatch").join("quiz_history.txt"));
        let (ready_tx, ready_rx) = std_mpsc::channel::<()>();
        let (line_tx, mut lines) = mpsc::unbounded_channel();
        let reader = tokio::task::spawn_blocking(move || read_lines(history_path, ready_rx, line_tx));

        self.print_welcome();
        println!("{}", board.render());

        let mut pending: Option<PendingReply> = None;
        let mut next = None;
        let _ = ready_tx.send(());

        loop {
            tokio::select! {
                event = lines.recv() => {
                    let Some(event) = event else { break };
                    match event {
                        InputEvent::Line(line) => match board.handle(&line) {
                            Step::Show(text) => println!("{}", text),
                            Step::Switch(view) => {
                                debug!("Leaving quiz for {} view", view);
                                next = Some(view);
                                break;
                            }
                            Step::Quit => {
                                println!("Bye!");
                                break;
                            }
                        },
                        InputEvent::Interrupted => println!("^C"),
                        InputEvent::Eof => {
                            println!("Bye!");
                            break;
                        }
                        InputEvent::Failed(err) => {
                            eprintln!("Error: {}", err);
                            break;
                        }
                    }
                    if let Some(started) = board.take_pending() {
                        // A newer pick supersedes whatever was still running
                        pending = Some(started);
                    }
                    let _ = ready_tx.send(());
                }
                finished = wait(&mut pending) => {
                    pending = None;
                    if let Some(text) = board.settle(unwrap_reply(finished)) {
                        println!();
                        println!("{}", text);
                    }
                }
            }
        }

        if let Some(handle) = pending.take() {
            handle.abort();
        }
        drop(ready_tx);
        if let Err(e) = reader.await {
            warn!("Quiz input reader stopped abnormally: {}", e);
        }

        Ok(next)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          petmatch - Personality Game        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Pick three pets and we'll tell you what they say about you.");
        println!();
        println!("{}", HELP);
        println!();
    }
}

/// Wait for the running classification, or forever when there is none
async fn wait(
    pending: &mut Option<PendingReply>,
) -> Result<Option<ClassificationReply>, JoinError> {
    match pending {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

fn unwrap_reply(
    finished: Result<Option<ClassificationReply>, JoinError>,
) -> Option<ClassificationReply> {
    finished.unwrap_or_else(|e| {
        warn!("Classification task failed: {}", e);
        None
    })
}

/// Blocking reader: one prompt per ready signal
///
/// Stops when the ready channel closes, on EOF, or on an editor error.
fn read_lines(
    history_path: Option<PathBuf>,
    ready: std_mpsc::Receiver<()>,
    lines: mpsc::UnboundedSender<InputEvent>,
) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            let _ = lines.send(InputEvent::Failed(e.to_string()));
            return;
        }
    };

    if let Some(ref path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.load_history(path);
    }

    while ready.recv().is_ok() {
        let event = next_event(&mut rl);
        let stop = matches!(event, InputEvent::Eof | InputEvent::Failed(_));
        if lines.send(event).is_err() || stop {
            break;
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Prompt until something other than a blank line arrives
fn next_event(rl: &mut DefaultEditor) -> InputEvent {
    loop {
        match rl.readline("pick> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.starts_with('/') {
                    let _ = rl.add_history_entry(line);
                }
                return InputEvent::Line(line.to_string());
            }
            Err(ReadlineError::Interrupted) => return InputEvent::Interrupted,
            Err(ReadlineError::Eof) => return InputEvent::Eof,
            Err(err) => return InputEvent::Failed(format!("{:?}", err)),
        }
    }
}
