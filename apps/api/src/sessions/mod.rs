// Interview sessions: start, answer question by question, complete and score.
// Scoring happens once, when the last answer arrives or the candidate stops early.

pub mod dashboard;
pub mod handlers;
pub mod lifecycle;
pub mod repository;
