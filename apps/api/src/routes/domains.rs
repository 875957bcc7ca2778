use axum::{extract::Path, Json};
use serde::Serialize;

use crate::domain::questions::questions_for;
use crate::domain::Domain;

#[derive(Debug, Serialize)]
pub struct QuestionSet {
    pub domain: Domain,
    pub questions: &'static [&'static str],
}

/// GET /api/v1/domains
pub async fn handle_list_domains() -> Json<Vec<Domain>> {
    Json(Domain::ALL.to_vec())
}

/// GET /api/v1/domains/:name/questions
///
/// Unknown names get the default domain's questions; the resolved domain is
/// echoed back so the caller can tell.
pub async fn handle_domain_questions(Path(name): Path<String>) -> Json<QuestionSet> {
    let domain = Domain::resolve(&name);
    Json(QuestionSet {
        domain,
        questions: questions_for(domain),
    })
}
