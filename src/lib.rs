// Library interface for wordle-game
// This allows integration tests to drive the round engine directly

use std::error::Error;
use std::fmt;

pub mod cli;
pub mod feedback;
pub mod logging;
pub mod round;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use feedback::{LetterStatus, evaluate_guess, format_guess_feedback};
pub use round::{LineSink, LineSource, MAX_ATTEMPTS, Round, run_menu};
pub use wordbank::{choose_word, load_wordbank_from_file, load_wordbank_from_str};

/// Fatal construction-time failures. Input-validation problems never surface
/// here; the round recovers from those by re-prompting in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidSecretWord(String),
    EmptyWordBank,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSecretWord(word) => {
                write!(f, "secret word '{word}' must be exactly 5 alphabetic letters")
            }
            GameError::EmptyWordBank => write!(f, "word bank contains no candidate words"),
        }
    }
}

impl Error for GameError {}
