//! Scores a single (question, answer) pair.
//!
//! Decision order, first match wins:
//! 1. blank (trimmed answer under 10 chars) → 0
//! 2. irrelevant (see `relevance`) → uniform draw in [10, 30)
//! 3. substantive → 40 base plus trait and length bonuses, capped at 100

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::lexicon::mentions_domain_term;
use crate::domain::Domain;
use crate::models::interview::Response;
use crate::scoring::markers::{contains_any, EXAMPLE_MARKERS, STRUCTURE_MARKERS};
use crate::scoring::relevance::is_irrelevant;

const MIN_ANSWER_CHARS: usize = 10;

const BASE_SCORE: f64 = 40.0;
const TECHNICAL_BONUS: f64 = 25.0;
const STRUCTURE_BONUS: f64 = 20.0;
const EXAMPLES_BONUS: f64 = 15.0;
/// (length threshold in chars, bonus). Each applies independently.
const LENGTH_BONUSES: &[(usize, f64)] = &[(100, 10.0), (200, 10.0)];
const MAX_SCORE: f64 = 100.0;

/// Score range for off-topic answers. The draw models interviewer
/// uncertainty about nonsense answers and is not meant to be stable.
pub const IRRELEVANT_SCORE_RANGE: std::ops::Range<f64> = 10.0..30.0;

/// Derived, per-response result. Never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseAnalysis {
    pub score: f64,
    pub is_blank: bool,
    pub is_irrelevant: bool,
    pub has_technical_terms: bool,
    pub is_structured: bool,
    pub has_examples: bool,
}

impl ResponseAnalysis {
    fn blank() -> Self {
        Self {
            score: 0.0,
            is_blank: true,
            is_irrelevant: false,
            has_technical_terms: false,
            is_structured: false,
            has_examples: false,
        }
    }

    fn irrelevant(score: f64) -> Self {
        Self {
            score,
            is_blank: false,
            is_irrelevant: true,
            has_technical_terms: false,
            is_structured: false,
            has_examples: false,
        }
    }
}

/// Analyzes one response against `domain`. `rng` is only consulted for
/// irrelevant answers.
pub fn analyze<R: Rng>(response: &Response, domain: Domain, rng: &mut R) -> ResponseAnalysis {
    let original = response.answer.trim();
    let lower = original.to_lowercase();

    if lower.chars().count() < MIN_ANSWER_CHARS {
        return ResponseAnalysis::blank();
    }

    if is_irrelevant(&lower, &response.question) {
        return ResponseAnalysis::irrelevant(rng.gen_range(IRRELEVANT_SCORE_RANGE));
    }

    let has_technical_terms = mentions_domain_term(&lower, domain);
    let is_structured = is_structured(original);
    let has_examples = contains_any(&lower, EXAMPLE_MARKERS);

    let mut score = BASE_SCORE;
    if has_technical_terms {
        score += TECHNICAL_BONUS;
    }
    if is_structured {
        score += STRUCTURE_BONUS;
    }
    if has_examples {
        score += EXAMPLES_BONUS;
    }
    let length = original.chars().count();
    for (threshold, bonus) in LENGTH_BONUSES {
        if length > *threshold {
            score += bonus;
        }
    }

    ResponseAnalysis {
        score: score.min(MAX_SCORE),
        is_blank: false,
        is_irrelevant: false,
        has_technical_terms,
        is_structured,
        has_examples,
    }
}

/// Discourse marker present, or more than three period-separated pieces.
fn is_structured(answer: &str) -> bool {
    contains_any(&answer.to_lowercase(), STRUCTURE_MARKERS) || answer.split('.').count() > 3
}
