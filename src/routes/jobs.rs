use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::AppError;
use crate::models::{CreateJobRequest, ListJobsQuery, UpdateJobRequest};
use crate::routes::AppState;

/// Configure job CRUD routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/jobs")
            .route(web::post().to(create_job))
            .route(web::get().to(list_jobs)),
    )
    .service(
        web::resource("/jobs/{job_id}")
            .route(web::get().to(get_job))
            .route(web::put().to(update_job))
            .route(web::delete().to(delete_job)),
    );
}

/// POST /jobs
///
/// Request body:
/// ```json
/// {
///   "title": "string",
///   "description": "string",
///   "required_skills": ["string"],
///   "min_years_experience": 0
/// }
/// ```
async fn create_job(
    state: web::Data<AppState>,
    req: web::Json<CreateJobRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let job = state.store.create_job(req.into_inner().into_new_job()).await?;
    tracing::info!(job_id = job.id, "Created job: {}", job.title);

    Ok(HttpResponse::Created().json(job))
}

/// GET /jobs?skip=0&limit=100
async fn list_jobs(
    state: web::Data<AppState>,
    query: web::Query<ListJobsQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let jobs = state.store.list_jobs(query.skip, query.limit).await?;

    Ok(HttpResponse::Ok().json(jobs))
}

async fn get_job(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let job = state.store.get_job(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(job))
}

/// PUT /jobs/{job_id}, only fields present in the body change
async fn update_job(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<UpdateJobRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let job_id = path.into_inner();
    let job = state
        .store
        .update_job(job_id, req.into_inner().into_changes())
        .await?;
    tracing::info!(job_id, "Updated job");

    Ok(HttpResponse::Ok().json(job))
}

async fn delete_job(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let job_id = path.into_inner();
    state.store.delete_job(job_id).await?;
    tracing::info!(job_id, "Deleted job");

    Ok(HttpResponse::NoContent().finish())
}
