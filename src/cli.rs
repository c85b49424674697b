use crate::round::{LineSink, LineSource};
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Wordle game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Fixed secret word for this session instead of a random pick
    #[arg(short = 's', long = "secret")]
    pub secret: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Interactive stdin source: echoes the prompt to stdout (no trailing
/// newline, like a shell prompt) and blocks for one line.
pub struct ConsoleInput;

impl LineSource for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

pub struct ConsoleOutput;

impl LineSink for ConsoleOutput {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Deterministic replacement for [`ConsoleInput`]: serves lines from any
/// reader (tests use `Cursor`) and swallows prompts.
pub struct ScriptedInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ScriptedInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptedInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli {
            wordbank_path: None,
            secret: None,
        };
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.secret, None);
    }

    #[test]
    fn test_cli_with_wordbank_path() {
        let cli = Cli {
            wordbank_path: Some("custom_wordbank.txt".to_string()),
            secret: None,
        };
        assert_eq!(cli.wordbank_path, Some("custom_wordbank.txt".to_string()));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["wordle-game", "-i", "words.txt", "--secret", "crane"]);
        assert_eq!(cli.wordbank_path, Some("words.txt".to_string()));
        assert_eq!(cli.secret, Some("crane".to_string()));
    }

    #[test]
    fn test_scripted_input_serves_lines_in_order() {
        let mut source = ScriptedInput::new(Cursor::new("crane\ny\n"));
        assert_eq!(source.read_line("ignored: "), Some("crane\n".to_string()));
        assert_eq!(source.read_line("ignored: "), Some("y\n".to_string()));
        assert_eq!(source.read_line("ignored: "), None);
    }

    #[test]
    fn test_scripted_input_preserves_raw_line() {
        // The engine owns trimming and case folding; the source stays raw.
        let mut source = ScriptedInput::new(Cursor::new("  CRANE  \n"));
        assert_eq!(source.read_line(""), Some("  CRANE  \n".to_string()));
    }

    #[test]
    fn test_vec_sink_records_lines() {
        let mut sink: Vec<String> = Vec::new();
        sink.write_line("first");
        sink.write_line("second");
        assert_eq!(sink, ["first", "second"]);
    }
}
