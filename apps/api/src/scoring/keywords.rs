use crate::scoring::markers::{MAX_KEYWORDS, MIN_KEYWORD_LEN, STOP_WORDS};

/// Pulls up to five content words from a question, in their original order.
///
/// Tokens are lower-cased whitespace splits; punctuation stays attached, so
/// "examples." is a keyword distinct from "examples". Short or degenerate
/// questions can yield an empty list.
pub fn extract_keywords(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_LEN && !STOP_WORDS.contains(word))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
