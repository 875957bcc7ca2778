use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Domain;
use crate::scoring::feedback::FeedbackReport;

/// One submitted answer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}

impl Response {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            timestamp: Utc::now(),
        }
    }
}

/// How the candidate answered. Audio and video are captured client-side and
/// never transcribed; only a placeholder transcript reaches the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    #[default]
    Text,
    Audio,
    Video,
}

/// A response as kept inside a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedResponse {
    #[serde(flatten)]
    pub response: Response,
    pub mode: ResponseMode,
    pub response_time_secs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub domain: Domain,
    /// Snapshot of the question list at session start.
    pub questions: Vec<String>,
    pub responses: Vec<RecordedResponse>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub score: Option<u32>,
    pub feedback: Option<FeedbackReport>,
    pub status: SessionStatus,
}

impl InterviewSession {
    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&str> {
        if self.status != SessionStatus::InProgress {
            return None;
        }
        self.questions
            .get(self.responses.len())
            .map(String::as_str)
    }

    pub fn scoring_inputs(&self) -> Vec<Response> {
        self.responses.iter().map(|r| r.response.clone()).collect()
    }
}
