use crate::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// System word list used when nothing else is configured.
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/american-english";

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:[a-z][a-z]){2,}$").expect("valid word regex"))
}

/// Lines made only of two or more lowercase letter pairs.
///
/// Proper nouns, possessives and odd-length words fall out here.
pub fn candidate_words(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| word_regex().is_match(line))
        .map(str::to_string)
        .collect()
}

pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = candidate_words(&text);
    log::info!("{} candidate words in {}", words.len(), path.display());
    Ok(words)
}
