use actix_web::{web, HttpResponse};

use crate::core::rank_jobs;
use crate::error::AppError;
use crate::routes::AppState;

/// Configure match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/candidates/{candidate_id}/matches",
        web::get().to(get_candidate_matches),
    );
}

/// Ranked job matches for one candidate
///
/// GET /candidates/{candidate_id}/matches
///
/// Response body, highest score first:
/// ```json
/// [
///   {
///     "jobId": 1,
///     "title": "Software Engineer",
///     "requiredSkills": ["Python", "FastAPI"],
///     "minYearsExperience": 2,
///     "matchScore": 85
///   }
/// ]
/// ```
async fn get_candidate_matches(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let candidate_id = path.into_inner();

    let candidate = state.store.get_candidate(candidate_id).await?;
    let jobs = state.store.all_jobs().await?;

    let matches = rank_jobs(&candidate, &jobs);

    tracing::info!(
        "Returning {} matches for candidate {}",
        matches.len(),
        candidate_id
    );

    Ok(HttpResponse::Ok().json(matches))
}
