use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::interview::{InterviewSession, SessionStatus};
use crate::models::user::User;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_sessions: usize,
    pub completed_sessions: usize,
    /// Rounded mean over completed sessions; 0 when there are none.
    pub average_score: u32,
    pub best_score: Option<u32>,
    pub days_since_joined: i64,
    pub last_session_at: Option<DateTime<Utc>>,
}

pub fn summarize(user: &User, sessions: &[InterviewSession], now: DateTime<Utc>) -> DashboardSummary {
    let scores: Vec<u32> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Completed)
        .map(|s| s.score.unwrap_or(0))
        .collect();

    let average_score = if scores.is_empty() {
        0
    } else {
        (scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64).round() as u32
    };

    DashboardSummary {
        total_sessions: sessions.len(),
        completed_sessions: scores.len(),
        average_score,
        best_score: scores.iter().copied().max(),
        days_since_joined: (now - user.created_at).num_days(),
        last_session_at: sessions.iter().map(|s| s.start_time).max(),
    }
}
