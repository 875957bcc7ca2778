use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::store::{get_json, put_json, KeyValueStore};

fn user_key(id: Uuid) -> String {
    format!("user:{id}")
}

fn email_key(email: &str) -> String {
    format!("user_email:{email}")
}

/// Result of a successful sign-up or sign-in, with a message for the client.
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutcome {
    pub user: User,
    pub message: String,
}

/// Emails are compared trimmed and lower-cased.
fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation(format!("'{email}' is not a valid email")));
    }
    Ok(email)
}

/// Registers a new account. Fails with `Conflict` if the email is taken.
pub async fn sign_up(
    store: &dyn KeyValueStore,
    email: &str,
    name: &str,
) -> Result<AuthOutcome, AppError> {
    let email = normalize_email(email)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        email: email.clone(),
        name: name.to_string(),
        created_at: now,
        last_login: now,
    };
    put_json(store, &user_key(user.id), &user).await?;

    // The email claim is the uniqueness point; the losing record is removed.
    if !store
        .put_if_absent(&email_key(&email), user.id.to_string())
        .await?
    {
        store.delete(&user_key(user.id)).await?;
        return Err(AppError::Conflict(
            "User already exists with this email".to_string(),
        ));
    }
    info!("Registered user {}", user.id);

    Ok(AuthOutcome {
        message: format!(
            "Welcome, {}! Your account has been created successfully. Please proceed to login to start your interview.",
            user.name
        ),
        user,
    })
}

/// Signs in by email and records `last_login`.
pub async fn sign_in(store: &dyn KeyValueStore, email: &str) -> Result<AuthOutcome, AppError> {
    let email = normalize_email(email)?;
    let user_id = store
        .get(&email_key(&email))
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("bad user index for {email}: {e}")))?;

    let mut user = get_user(store, user_id).await?;
    user.last_login = Utc::now();
    put_json(store, &user_key(user.id), &user).await?;

    Ok(AuthOutcome {
        message: format!("Login successful. Welcome back, {}!", user.name),
        user,
    })
}

pub async fn get_user(store: &dyn KeyValueStore, id: Uuid) -> Result<User, AppError> {
    get_json(store, &user_key(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
}
