use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interview::InterviewSession;
use crate::store::{get_json, put_json, KeyValueStore};

fn session_key(id: Uuid) -> String {
    format!("session:{id}")
}

fn user_index_key(user_id: Uuid) -> String {
    format!("user_sessions:{user_id}")
}

async fn load_index(store: &dyn KeyValueStore, user_id: Uuid) -> Result<Vec<Uuid>, AppError> {
    let members = store.set_members(&user_index_key(user_id)).await?;
    members
        .iter()
        .map(|raw| {
            Uuid::parse_str(raw).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("bad session index for user {user_id}: {e}"))
            })
        })
        .collect()
}

/// Writes the session and makes sure it is listed under its user.
///
/// Callers that read, change and write back an existing session must hold its
/// lock in `KeyLocks` (see `session_lock_key`).
pub async fn save_session(
    store: &dyn KeyValueStore,
    session: &InterviewSession,
) -> Result<(), AppError> {
    put_json(store, &session_key(session.id), session).await?;
    store
        .add_to_set(&user_index_key(session.user_id), &session.id.to_string())
        .await?;
    debug!("Saved session {} ({:?})", session.id, session.status);
    Ok(())
}

/// Key under which mutations of one session are serialized.
pub fn session_lock_key(id: Uuid) -> String {
    session_key(id)
}

pub async fn get_session(store: &dyn KeyValueStore, id: Uuid) -> Result<InterviewSession, AppError> {
    get_json(store, &session_key(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// All sessions of a user, newest first. Index entries whose session has
/// disappeared are skipped.
pub async fn list_user_sessions(
    store: &dyn KeyValueStore,
    user_id: Uuid,
) -> Result<Vec<InterviewSession>, AppError> {
    let mut sessions = Vec::new();
    for id in load_index(store, user_id).await? {
        if let Some(session) = get_json::<InterviewSession>(store, &session_key(id)).await? {
            sessions.push(session);
        }
    }
    sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    Ok(sessions)
}

/// Removes a session and its index entry.
pub async fn delete_session(
    store: &dyn KeyValueStore,
    session: &InterviewSession,
) -> Result<(), AppError> {
    store.delete(&session_key(session.id)).await?;
    store
        .remove_from_set(&user_index_key(session.user_id), &session.id.to_string())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use crate::models::interview::SessionStatus;
    use crate::store::InMemoryStore;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    fn make_session(user_id: Uuid, minutes_ago: i64) -> InterviewSession {
        InterviewSession {
            id: Uuid::new_v4(),
            user_id,
            domain: Domain::CivilEngineering,
            questions: vec!["Q1".to_string()],
            responses: vec![],
            start_time: Utc::now() - Duration::minutes(minutes_ago),
            end_time: None,
            score: None,
            feedback: None,
            status: SessionStatus::InProgress,
        }
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let store = InMemoryStore::new();
        let session = make_session(Uuid::new_v4(), 0);
        save_session(&store, &session).await.unwrap();
        let loaded = get_session(&store, session.id).await.unwrap();
        assert_eq!(loaded.id, session.id);
        assert_eq!(loaded.domain, Domain::CivilEngineering);
    }

    #[tokio::test]
    async fn test_missing_session_is_not_found() {
        let store = InMemoryStore::new();
        let err = get_session(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_saves_are_idempotent() {
        let store = InMemoryStore::new();
        let user = Uuid::new_v4();
        let older = make_session(user, 60);
        let newer = make_session(user, 5);
        save_session(&store, &older).await.unwrap();
        save_session(&store, &newer).await.unwrap();
        save_session(&store, &older).await.unwrap();

        let listed = list_user_sessions(&store, user).await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[tokio::test]
    async fn test_sessions_are_scoped_to_user() {
        let store = InMemoryStore::new();
        save_session(&store, &make_session(Uuid::new_v4(), 0)).await.unwrap();
        assert!(list_user_sessions(&store, Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_from_index() {
        let store = InMemoryStore::new();
        let user = Uuid::new_v4();
        let session = make_session(user, 0);
        save_session(&store, &session).await.unwrap();
        delete_session(&store, &session).await.unwrap();

        assert!(get_session(&store, session.id).await.is_err());
        assert!(list_user_sessions(&store, user).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_keep_every_index_entry() {
        let store = Arc::new(InMemoryStore::new());
        let user = Uuid::new_v4();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    save_session(store.as_ref(), &make_session(user, i)).await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(list_user_sessions(store.as_ref(), user).await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_malformed_index_entry_is_internal_error() {
        let store = InMemoryStore::new();
        let user = Uuid::new_v4();
        store.add_to_set(&user_index_key(user), "not-a-uuid").await.unwrap();
        let err = list_user_sessions(&store, user).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
