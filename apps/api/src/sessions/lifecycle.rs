//! Session state machine: `InProgress` → `Completed`.
//!
//! Answers are taken strictly in question order. The answer to the final
//! question completes the session; `complete_session` allows stopping early.
//! Every transition of an existing session runs under its `KeyLocks` entry, so
//! concurrent requests against one session apply one after another.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::accounts::registry::get_user;
use crate::domain::questions::questions_for;
use crate::domain::Domain;
use crate::errors::AppError;
use crate::models::interview::{
    InterviewSession, RecordedResponse, Response, ResponseMode, SessionStatus,
};
use crate::scoring::feedback::{synthesize, FeedbackReport};
use crate::scoring::ScoringError;
use crate::sessions::repository::{
    delete_session, get_session, save_session, session_lock_key,
};
use crate::store::{KeyLocks, KeyValueStore};

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswer {
    #[serde(default)]
    pub mode: ResponseMode,
    /// Required for text mode.
    pub answer: Option<String>,
    /// Required for audio and video mode.
    pub recording_secs: Option<u32>,
    #[serde(default)]
    pub response_time_secs: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub session: InterviewSession,
    pub next_question: Option<String>,
    pub feedback: Option<FeedbackReport>,
}

/// Opens a new session for `user_id`. Unknown domain names fall back to the
/// default domain.
pub async fn start_session(
    store: &dyn KeyValueStore,
    user_id: Uuid,
    domain_name: &str,
) -> Result<InterviewSession, AppError> {
    get_user(store, user_id).await?;
    let domain = Domain::resolve(domain_name);

    let session = InterviewSession {
        id: Uuid::new_v4(),
        user_id,
        domain,
        questions: questions_for(domain).iter().map(|q| q.to_string()).collect(),
        responses: Vec::new(),
        start_time: Utc::now(),
        end_time: None,
        score: None,
        feedback: None,
        status: SessionStatus::InProgress,
    };
    save_session(store, &session).await?;
    info!("Started {domain} session {} for user {user_id}", session.id);
    Ok(session)
}

/// Records the answer to the current question. Completes and scores the
/// session when that was the last question.
pub async fn submit_answer<R: Rng>(
    store: &dyn KeyValueStore,
    locks: &KeyLocks,
    rng: &Mutex<R>,
    session_id: Uuid,
    submission: SubmitAnswer,
) -> Result<SubmitOutcome, AppError> {
    let answer = answer_text(&submission)?;
    let _guard = locks.lock(&session_lock_key(session_id)).await;
    let mut session = get_session(store, session_id).await?;
    let question = session
        .current_question()
        .ok_or_else(|| AppError::Conflict(format!("Session {session_id} is already completed")))?
        .to_string();

    session.responses.push(RecordedResponse {
        response: Response::new(question, answer),
        mode: submission.mode,
        response_time_secs: submission.response_time_secs,
    });

    if session.responses.len() >= session.questions.len() {
        finalize(&mut session, &mut *rng.lock().await)?;
    }
    save_session(store, &session).await?;

    Ok(SubmitOutcome {
        next_question: session.current_question().map(str::to_string),
        feedback: session.feedback.clone(),
        session,
    })
}

/// Ends an in-progress session early and scores what was answered so far.
pub async fn complete_session<R: Rng>(
    store: &dyn KeyValueStore,
    locks: &KeyLocks,
    rng: &Mutex<R>,
    session_id: Uuid,
) -> Result<InterviewSession, AppError> {
    let _guard = locks.lock(&session_lock_key(session_id)).await;
    let mut session = get_session(store, session_id).await?;
    if session.status == SessionStatus::Completed {
        return Err(AppError::Conflict(format!(
            "Session {session_id} is already completed"
        )));
    }
    finalize(&mut session, &mut *rng.lock().await)?;
    save_session(store, &session).await?;
    Ok(session)
}

/// Discards an in-progress session. Completed sessions are kept as history.
pub async fn abandon_session(
    store: &dyn KeyValueStore,
    locks: &KeyLocks,
    session_id: Uuid,
) -> Result<(), AppError> {
    let _guard = locks.lock(&session_lock_key(session_id)).await;
    let session = get_session(store, session_id).await?;
    if session.status == SessionStatus::Completed {
        return Err(AppError::Conflict(format!(
            "Session {session_id} is completed and cannot be discarded"
        )));
    }
    delete_session(store, &session).await?;
    info!("Abandoned session {session_id}");
    Ok(())
}

fn finalize<R: Rng>(session: &mut InterviewSession, rng: &mut R) -> Result<(), ScoringError> {
    let report = synthesize(&session.scoring_inputs(), session.domain, rng)?;
    info!(
        "Completed session {} with score {} ({} responses)",
        session.id,
        report.score,
        session.responses.len()
    );
    session.score = Some(report.score);
    session.feedback = Some(report);
    session.end_time = Some(Utc::now());
    session.status = SessionStatus::Completed;
    Ok(())
}

/// Text answers are trimmed and must not be empty. Audio and video are not
/// transcribed; a placeholder transcript stands in for the recording.
fn answer_text(submission: &SubmitAnswer) -> Result<String, AppError> {
    match submission.mode {
        ResponseMode::Text => {
            let answer = submission.answer.as_deref().unwrap_or("").trim();
            if answer.is_empty() {
                return Err(AppError::Validation("answer cannot be empty".to_string()));
            }
            Ok(answer.to_string())
        }
        ResponseMode::Audio | ResponseMode::Video => {
            let secs = submission.recording_secs.ok_or_else(|| {
                AppError::Validation(
                    "recording_secs is required for audio and video responses".to_string(),
                )
            })?;
            Ok(placeholder_transcript(submission.mode, secs))
        }
    }
}

fn placeholder_transcript(mode: ResponseMode, secs: u32) -> String {
    let label = match mode {
        ResponseMode::Text => "TEXT",
        ResponseMode::Audio => "AUDIO",
        ResponseMode::Video => "VIDEO",
    };
    format!("[{label} RESPONSE] - Response recorded successfully. Duration: {secs} seconds.")
}
