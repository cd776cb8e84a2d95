use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::AppError;
use crate::models::{CreateCandidateRequest, UpdateCandidateRequest};
use crate::routes::AppState;

/// Configure candidate CRUD routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/candidates").route(web::post().to(create_candidate)))
        .service(
            web::resource("/candidates/{candidate_id}")
                .route(web::get().to(get_candidate))
                .route(web::put().to(update_candidate))
                .route(web::delete().to(delete_candidate)),
        );
}

/// POST /candidates
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "skills": ["string"],
///   "years_experience": 0
/// }
/// ```
async fn create_candidate(
    state: web::Data<AppState>,
    req: web::Json<CreateCandidateRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let candidate = state
        .store
        .create_candidate(req.into_inner().into_new_candidate())
        .await?;
    tracing::info!(candidate_id = candidate.id, "Created candidate");

    Ok(HttpResponse::Created().json(candidate))
}

async fn get_candidate(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let candidate = state.store.get_candidate(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(candidate))
}

async fn update_candidate(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<UpdateCandidateRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let candidate_id = path.into_inner();
    let candidate = state
        .store
        .update_candidate(candidate_id, req.into_inner().into_changes())
        .await?;
    tracing::info!(candidate_id, "Updated candidate");

    Ok(HttpResponse::Ok().json(candidate))
}

async fn delete_candidate(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let candidate_id = path.into_inner();
    state.store.delete_candidate(candidate_id).await?;
    tracing::info!(candidate_id, "Deleted candidate");

    Ok(HttpResponse::NoContent().finish())
}
