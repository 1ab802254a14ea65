//! The personality quiz.
//!
//! Three picks complete a round; completing a round asks a classifier for a
//! personality label.
//!
//! - [`selection::SelectionSet`] - bounded ordered picks
//! - [`tracker::QuizTracker`] - round state machine with epoch-stamped requests
//! - [`personality::Personality`] - the label shown at the end of a round

pub mod personality;
pub mod selection;
pub mod tracker;
