//! Fixed phrase tables consumed by the scoring predicates.

/// Function words dropped from a question before keyword selection.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "how", "what",
    "why", "when", "where", "would", "could", "should",
];

/// Filler and non-answer phrases. Any occurrence marks an answer as off-topic.
pub const BANNED_PHRASES: &[&str] = &[
    "random",
    "test",
    "hello",
    "nothing",
    "idk",
    "i don't know",
    "whatever",
];

/// Discourse markers that suggest an organized answer.
pub const STRUCTURE_MARKERS: &[&str] = &[
    "first",
    "second",
    "third",
    "finally",
    "firstly",
    "secondly",
    "thirdly",
    "initially",
    "then",
    "next",
    "lastly",
    "because",
    "therefore",
    "however",
    "moreover",
    "for example",
    "such as",
    "in conclusion",
];

/// Cues that the candidate backs a claim with an example or past work.
pub const EXAMPLE_MARKERS: &[&str] = &[
    "for example",
    "such as",
    "like",
    "including",
    "instance",
    "case",
    "project",
    "experience",
    "worked on",
    "built",
    "designed",
    "implemented",
];

/// Keywords shorter than or equal to this many characters are ignored.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Upper bound on keywords pulled from one question.
pub const MAX_KEYWORDS: usize = 5;

/// Answers with more qualifying words than this and no keyword overlap are off-topic.
pub const OFF_TOPIC_WORD_THRESHOLD: usize = 5;

/// Returns true if `haystack` contains any of `phrases`.
pub fn contains_any(haystack: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| haystack.contains(p))
}
