use crate::GameError;
use crate::feedback::WORD_LEN;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn is_playable(word: &str) -> bool {
    word.len() == WORD_LEN && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|word| is_playable(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_ascii_lowercase();
        if is_playable(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Picks one secret word from `candidates` using the injected strategy.
/// The picker returns an index, taken modulo the candidate count, so a
/// uniform random picker and a fixed test picker plug in the same way.
pub fn choose_word<F>(candidates: &[String], picker: F) -> Result<String, GameError>
where
    F: Fn(&[String]) -> usize,
{
    if candidates.is_empty() {
        return Err(GameError::EmptyWordBank);
    }
    let index = picker(candidates) % candidates.len();
    Ok(candidates[index].clone())
}
