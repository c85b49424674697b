//! Per-letter guess feedback against the secret word.

/// Guesses and secrets are always exactly this many letters.
pub const WORD_LEN: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    #[must_use]
    pub fn marker(self) -> char {
        match self {
            LetterStatus::Correct => '✓',
            LetterStatus::Present => '?',
            LetterStatus::Absent => 'x',
        }
    }
}

/// Scores `guess` against `secret` position by position.
///
/// Two passes so duplicate letters are handled correctly: the first pass
/// marks exact matches and counts each unmatched secret letter; the second
/// pass hands out `Present` marks until a letter's remaining count runs out.
/// A letter never earns more non-`Absent` marks than it has occurrences in
/// the secret, and exact matches are never demoted.
///
/// Both inputs must already be normalized to lowercase ASCII and exactly
/// [`WORD_LEN`] letters long; [`crate::round::Round`] guarantees this.
#[must_use]
pub fn evaluate_guess(secret: &str, guess: &str) -> [LetterStatus; WORD_LEN] {
    let secret = secret.as_bytes();
    let guess = guess.as_bytes();
    let mut statuses = [LetterStatus::Absent; WORD_LEN];
    let mut remaining = [0u8; 26];

    for i in 0..WORD_LEN {
        if guess[i] == secret[i] {
            statuses[i] = LetterStatus::Correct;
        } else {
            remaining[(secret[i] - b'a') as usize] += 1;
        }
    }

    for i in 0..WORD_LEN {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        let slot = &mut remaining[(guess[i] - b'a') as usize];
        if *slot > 0 {
            statuses[i] = LetterStatus::Present;
            *slot -= 1;
        }
    }

    statuses
}

/// Renders one guess as space-joined `<UPPER>[marker]` pieces,
/// e.g. `C[✓] R[x] A[?] N[x] E[✓]`.
#[must_use]
pub fn format_guess_feedback(secret: &str, guess: &str) -> String {
    let statuses = evaluate_guess(secret, guess);
    guess
        .chars()
        .zip(statuses)
        .map(|(letter, status)| format!("{}[{}]", letter.to_ascii_uppercase(), status.marker()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn test_all_correct() {
        assert_eq!(evaluate_guess("crane", "crane"), [Correct; 5]);
    }

    #[test]
    fn test_all_absent() {
        assert_eq!(evaluate_guess("crane", "onion")[0], Absent);
        assert_eq!(evaluate_guess("might", "crows"), [Absent; 5]);
    }

    #[test]
    fn test_duplicate_letters_eerie_refer() {
        // Secret has two 'e's; the correct 'e' and one present 'e' consume
        // both, and the two 'r's in the guess share the secret's single 'r'.
        assert_eq!(
            evaluate_guess("eerie", "refer"),
            [Present, Correct, Absent, Present, Absent]
        );
    }

    #[test]
    fn test_duplicate_guess_letters_capped_by_secret_count() {
        // "crane" holds exactly one 'e', matched in place; the other four
        // 'e's in the guess must all come back absent.
        let statuses = evaluate_guess("crane", "eeeee");
        assert_eq!(statuses, [Absent, Absent, Absent, Absent, Correct]);
    }

    #[test]
    fn test_correct_never_demoted() {
        // 'a' at position 2 matches exactly; the 'a' at position 0 can only
        // be present if the secret has a second 'a'.
        let statuses = evaluate_guess("crane", "again");
        assert_eq!(statuses[2], Correct);
        assert_eq!(statuses[0], Absent);
    }

    #[test]
    fn test_correct_iff_positions_match() {
        let cases = [("crane", "crate"), ("slate", "least"), ("eerie", "geese")];
        for (secret, guess) in cases {
            let statuses = evaluate_guess(secret, guess);
            for (i, (s, g)) in secret.chars().zip(guess.chars()).enumerate() {
                assert_eq!(statuses[i] == Correct, s == g, "{secret}/{guess} at {i}");
            }
        }
    }

    #[test]
    fn test_non_absent_marks_never_exceed_secret_occurrences() {
        let cases = [("eerie", "refer"), ("crane", "eeeee"), ("allow", "llama")];
        for (secret, guess) in cases {
            let statuses = evaluate_guess(secret, guess);
            for letter in 'a'..='z' {
                let marks = guess
                    .chars()
                    .zip(statuses)
                    .filter(|&(g, st)| g == letter && st != Absent)
                    .count();
                let occurrences = secret.chars().filter(|&s| s == letter).count();
                assert!(marks <= occurrences, "{secret}/{guess} letter {letter}");
            }
        }
    }

    #[test]
    fn test_format_guess_feedback_markers() {
        assert_eq!(
            format_guess_feedback("crane", "crane"),
            "C[✓] R[✓] A[✓] N[✓] E[✓]"
        );
        assert_eq!(
            format_guess_feedback("eerie", "refer"),
            "R[?] E[✓] F[x] E[?] R[x]"
        );
    }
}
