//! Response-scoring engine: pure functions from answer text to scores and
//! feedback. No I/O; the only non-determinism is the injected RNG used for
//! off-topic answers.

pub mod analyzer;
pub mod feedback;
pub mod keywords;
pub mod markers;
pub mod relevance;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("cannot score an interview with no responses")]
    EmptyInterview,
}
