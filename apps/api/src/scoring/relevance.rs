//! Off-topic detection: keyword overlap between question and answer, plus a
//! list of filler phrases that never constitute an answer.
//!
//! Overlap is an approximate, bidirectional substring test. "systems" matches
//! "system", but a short answer word buried inside an unrelated keyword also
//! matches. The rest of the scoring model is calibrated against this, so it
//! is kept approximate on purpose.

use crate::scoring::keywords::extract_keywords;
use crate::scoring::markers::{
    contains_any, BANNED_PHRASES, MIN_KEYWORD_LEN, OFF_TOPIC_WORD_THRESHOLD,
};

/// Returns true when `answer` looks unrelated to `question`.
pub fn is_irrelevant(answer: &str, question: &str) -> bool {
    let answer_lower = answer.to_lowercase();
    has_no_overlap(&answer_lower, question) || contains_any(&answer_lower, BANNED_PHRASES)
}

/// No question keyword overlaps any answer word, and the answer is long
/// enough for that to mean something. Short answers are never flagged here.
fn has_no_overlap(answer_lower: &str, question: &str) -> bool {
    let keywords = extract_keywords(question);
    let answer_words: Vec<&str> = answer_lower
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_KEYWORD_LEN)
        .collect();

    let common = keywords
        .iter()
        .filter(|kw| {
            answer_words
                .iter()
                .any(|w| w.contains(kw.as_str()) || kw.contains(w))
        })
        .count();

    common == 0 && answer_words.len() > OFF_TOPIC_WORD_THRESHOLD
}
