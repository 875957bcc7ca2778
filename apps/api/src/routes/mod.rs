pub mod domains;
pub mod health;
pub mod scoring;

use axum::{
    routing::{get, post},
    Router,
};

use crate::accounts::handlers as accounts;
use crate::sessions::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Domains & question bank
        .route("/api/v1/domains", get(domains::handle_list_domains))
        .route(
            "/api/v1/domains/:name/questions",
            get(domains::handle_domain_questions),
        )
        // Stateless scoring
        .route("/api/v1/feedback", post(scoring::handle_feedback))
        .route("/api/v1/analyze", post(scoring::handle_analyze))
        // Accounts
        .route("/api/v1/users/signup", post(accounts::handle_sign_up))
        .route("/api/v1/users/signin", post(accounts::handle_sign_in))
        .route(
            "/api/v1/users/:id/sessions",
            get(accounts::handle_list_sessions),
        )
        .route(
            "/api/v1/users/:id/dashboard",
            get(accounts::handle_dashboard),
        )
        // Interview sessions
        .route("/api/v1/sessions", post(sessions::handle_start_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_abandon_session),
        )
        .route(
            "/api/v1/sessions/:id/responses",
            post(sessions::handle_submit_answer),
        )
        .route(
            "/api/v1/sessions/:id/complete",
            post(sessions::handle_complete_session),
        )
        .with_state(state)
}
