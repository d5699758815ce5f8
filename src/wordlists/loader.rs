//! Word list loading utilities
//!
//! Reads plain-text word lists, one word per line.

use super::Dictionary;
use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or names the first line that
/// is not a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_infogain::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    parse_words(&content).with_context(|| format!("invalid word list {}", path.display()))
}

/// Parse newline-separated words
///
/// # Errors
///
/// Returns an error naming the first line that is not a valid word.
pub fn parse_words(content: &str) -> Result<Vec<Word>> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, trimmed)| !trimmed.is_empty())
        .map(|(line_number, trimmed)| {
            Word::new(trimmed).with_context(|| format!("line {line_number}"))
        })
        .collect()
}

/// Load the guess and answer lists and assemble a [`Dictionary`]
///
/// Without a guess list, the answers double as the guess pool.
///
/// # Errors
///
/// Returns an error if either file cannot be loaded or the words do not
/// share a single length.
pub fn load_dictionary(guesses: Option<&Path>, answers: &Path) -> Result<Dictionary> {
    let answer_words = load_from_file(answers)?;
    let guess_words = match guesses {
        Some(path) => load_from_file(path)?,
        None => Vec::new(),
    };

    Ok(Dictionary::from_lists(guess_words, answer_words)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_skips_blank_lines() {
        let words = parse_words("crane\n\n  slate \nIRATE\n").unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn parse_words_reports_bad_line() {
        let err = parse_words("crane\nsl4te\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("").unwrap().is_empty());
    }

    #[test]
    fn load_dictionary_from_files() {
        let dir = std::env::temp_dir().join(format!("wordle-infogain-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let guesses = dir.join("guesses.txt");
        let answers = dir.join("answers.txt");
        fs::write(&guesses, "cfw\n").unwrap();
        fs::write(&answers, "car\nfar\nwar\ntar\n").unwrap();

        let dictionary = load_dictionary(Some(&guesses), &answers).unwrap();
        assert_eq!(dictionary.guesses().len(), 5);
        assert_eq!(dictionary.answers().len(), 4);

        let answers_only = load_dictionary(None, &answers).unwrap();
        assert_eq!(answers_only.guesses(), answers_only.answers());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_missing_file_fails() {
        let result = load_from_file("/definitely/not/a/word/list.txt");
        assert!(result.is_err());
    }
}
