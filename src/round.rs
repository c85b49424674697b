use crate::GameError;
use crate::debug_log;
use crate::feedback::{WORD_LEN, format_guess_feedback};
use crate::wordbank::choose_word;

/// A round ends in a loss once this many guesses are confirmed without a win.
pub const MAX_ATTEMPTS: usize = 6;

/// One line of user input per call. Implementations write `prompt` before
/// blocking; `None` means the input is exhausted (EOF / script ran out).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// One line of game output per call. Never fails observably to the engine.
pub trait LineSink {
    fn write_line(&mut self, text: &str);
}

// Lets tests capture a transcript with plain assertions.
impl LineSink for Vec<String> {
    fn write_line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundState {
    WordEntry,
    Confirm,
    Score,
    CheckWinner,
    Review,
    ConfirmAfterReview,
    Display,
}

/// A single play-through of the guessing game: the secret word, the confirmed
/// attempt history, and the state machine that drives prompts and scoring.
///
/// Constructed once per round and discarded after [`Round::play`] returns;
/// the menu loop builds a fresh one for every play selection.
pub struct Round {
    secret_word: String,
    attempts: Vec<String>,
    attempt_count: usize,
    has_won: bool,
    has_quit: bool,
    current_guess: String,
}

fn is_valid_guess(word: &str) -> bool {
    word.len() == WORD_LEN && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_quit_command(token: &str) -> bool {
    matches!(token, "q" | "quit" | "exit")
}

fn is_history_command(token: &str) -> bool {
    matches!(token, "h" | "history")
}

impl Round {
    /// Fails fast if the secret is not exactly five ASCII letters; the round
    /// must not start with an unplayable word.
    pub fn new(secret_word: &str) -> Result<Round, GameError> {
        if !is_valid_guess(secret_word) {
            return Err(GameError::InvalidSecretWord(secret_word.to_string()));
        }
        Ok(Round {
            secret_word: secret_word.to_ascii_lowercase(),
            attempts: Vec::new(),
            attempt_count: 0,
            has_won: false,
            has_quit: false,
            current_guess: String::new(),
        })
    }

    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    #[must_use]
    pub fn attempts(&self) -> &[String] {
        &self.attempts
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempt_count
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    #[must_use]
    pub fn has_quit(&self) -> bool {
        self.has_quit
    }

    /// Runs the round to completion: prompts for guesses, confirms and scores
    /// them, shows the per-letter review, and finishes with the summary.
    /// Returns once the final summary has been acknowledged.
    pub fn play<S: LineSource, K: LineSink>(&mut self, source: &mut S, sink: &mut K) {
        let mut state = RoundState::WordEntry;

        loop {
            debug_log!("round state: {:?}", state);
            state = match state {
                RoundState::WordEntry => self.word_entry(source, sink),
                RoundState::Confirm => self.confirm(source, sink),
                RoundState::Score => {
                    self.score();
                    RoundState::CheckWinner
                }
                RoundState::CheckWinner => self.check_winner(),
                RoundState::Review => self.review(sink),
                RoundState::ConfirmAfterReview => self.confirm_after_review(source, sink),
                RoundState::Display => {
                    self.display(source, sink);
                    return;
                }
            };
        }
    }

    fn word_entry<S: LineSource, K: LineSink>(
        &mut self,
        source: &mut S,
        sink: &mut K,
    ) -> RoundState {
        let Some(line) = source.read_line("Enter a 5-letter guess (or type 'history' / 'quit'): ")
        else {
            self.has_quit = true;
            return RoundState::Display;
        };
        let guess = line.trim().to_ascii_lowercase();

        if is_quit_command(&guess) {
            self.has_quit = true;
            return RoundState::Display;
        }
        if is_history_command(&guess) {
            sink.write_line("\nPrevious guesses with letter feedback:");
            self.render_history(sink, false);
            return RoundState::WordEntry;
        }
        if !is_valid_guess(&guess) {
            sink.write_line("Invalid guess. Please enter exactly five letters.");
            return RoundState::WordEntry;
        }

        self.current_guess = guess;
        RoundState::Confirm
    }

    fn confirm<S: LineSource, K: LineSink>(&mut self, source: &mut S, sink: &mut K) -> RoundState {
        let prompt = format!("Use '{}'? (y/n, or 'quit'): ", self.current_guess);
        let Some(line) = source.read_line(&prompt) else {
            self.has_quit = true;
            return RoundState::Display;
        };

        match line.trim().to_ascii_lowercase().as_str() {
            token if is_quit_command(token) => {
                self.has_quit = true;
                RoundState::Display
            }
            "n" | "no" => {
                self.current_guess.clear();
                RoundState::WordEntry
            }
            "y" | "yes" => RoundState::Score,
            _ => {
                sink.write_line("Please answer with y or n (or quit).");
                RoundState::Confirm
            }
        }
    }

    /// Commits `current_guess` to the history. Called exactly once per
    /// confirmed guess; the state machine never revisits `Score` without
    /// passing through `WordEntry` and `Confirm` again.
    fn score(&mut self) {
        self.attempts.push(self.current_guess.clone());
        self.attempt_count += 1;
        debug_log!("scored attempt {}: {}", self.attempt_count, self.current_guess);
    }

    fn is_winner(&self) -> bool {
        self.current_guess == self.secret_word
    }

    fn check_winner(&mut self) -> RoundState {
        self.has_won = self.is_winner();
        if self.has_won || self.attempt_count >= MAX_ATTEMPTS {
            RoundState::Display
        } else {
            RoundState::Review
        }
    }

    fn review<K: LineSink>(&self, sink: &mut K) -> RoundState {
        sink.write_line("\nGuess review:");
        self.render_history(sink, true);
        sink.write_line(
            "Legend: [✓]=right letter/right spot  [?]=in word/wrong spot  [x]=not in word",
        );
        RoundState::ConfirmAfterReview
    }

    fn confirm_after_review<S: LineSource, K: LineSink>(
        &mut self,
        source: &mut S,
        sink: &mut K,
    ) -> RoundState {
        let Some(line) = source.read_line("Next action: (n)ext guess, (h)istory, or (q)uit: ")
        else {
            self.has_quit = true;
            return RoundState::Display;
        };

        // "n" means "next" here, unlike the confirm prompt where it means
        // "no"; the alias sets are scoped to their states.
        match line.trim().to_ascii_lowercase().as_str() {
            "n" | "next" | "" => RoundState::WordEntry,
            token if is_history_command(token) => {
                sink.write_line("\nPrevious guesses with letter feedback:");
                self.render_history(sink, false);
                RoundState::ConfirmAfterReview
            }
            token if is_quit_command(token) => {
                self.has_quit = true;
                RoundState::Display
            }
            _ => {
                sink.write_line("Invalid option. Choose n, h, or q.");
                RoundState::ConfirmAfterReview
            }
        }
    }

    fn render_history<K: LineSink>(&self, sink: &mut K, show_header: bool) {
        if show_header {
            sink.write_line("Previous guesses with letter feedback:");
        }

        if self.attempts.is_empty() {
            sink.write_line("No guesses yet.");
            return;
        }

        for (index, attempt) in self.attempts.iter().enumerate() {
            let feedback = format_guess_feedback(&self.secret_word, attempt);
            sink.write_line(&format!("{}. {}", index + 1, feedback));
        }
    }

    fn display<S: LineSource, K: LineSink>(&self, source: &mut S, sink: &mut K) {
        sink.write_line("\nRound Complete");
        self.render_history(sink, true);
        sink.write_line(&format!("Total attempts: {}", self.attempt_count));

        // Explicit outcome precedence: a win beats a quit beats a loss. The
        // state machine never sets both has_won and has_quit, but the guard
        // keeps the summary independent of transition ordering.
        if self.has_won {
            sink.write_line("You Won.");
        } else if self.has_quit {
            sink.write_line("Round ended early. You quit.");
        } else {
            sink.write_line("You Lost.");
        }

        let _ = source.read_line("Press Enter to return to menu...");
    }
}

/// Top-level menu shell: repeat until the player leaves, constructing a fresh
/// [`Round`] with a word from `wordbank` for every play selection.
pub fn run_menu<S, K, F>(
    wordbank: &[String],
    picker: F,
    source: &mut S,
    sink: &mut K,
) -> Result<(), GameError>
where
    S: LineSource,
    K: LineSink,
    F: Fn(&[String]) -> usize,
{
    loop {
        sink.write_line("\nWordle Main Menu");
        sink.write_line("1) Play a round of Wordle");
        sink.write_line("2) Leave");
        let Some(selection) = source.read_line("Choose an option: ") else {
            return Ok(());
        };

        match selection.trim() {
            "2" => {
                sink.write_line("Thanks for Playing and come back another time!");
                return Ok(());
            }
            "1" => {
                let secret = choose_word(wordbank, &picker)?;
                let mut round = Round::new(&secret)?;
                round.play(source, sink);
            }
            _ => sink.write_line("Invalid selection. Please choose 1 or 2."),
        }
    }
}
