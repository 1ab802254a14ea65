//! Interactive quiz module
//!
//! Provides a readline-based personality quiz over the home listing.

mod board;
mod repl;

pub use board::{PendingReply, QuizBoard, Step};
pub use repl::QuizRepl;
