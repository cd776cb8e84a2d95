// HTTP tests for the job matching API

use actix_web::{http::StatusCode, test, App};
use async_trait::async_trait;
use job_match::models::{
    Candidate, CandidateChanges, ErrorResponse, Job, JobChanges, JobMatch, NewCandidate, NewJob,
};
use job_match::routes::{configure_app, AppState};
use job_match::services::{MemoryStore, RecordStore, StoreError};
use serde_json::json;
use std::sync::Arc;

fn state() -> AppState {
    AppState::new(Arc::new(MemoryStore::new()))
}

/// Store whose backing database is unreachable
struct UnreachableStore;

#[async_trait]
impl RecordStore for UnreachableStore {
    async fn create_job(&self, _job: NewJob) -> Result<Job, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn get_job(&self, _id: i64) -> Result<Job, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn list_jobs(&self, _skip: i64, _limit: i64) -> Result<Vec<Job>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn all_jobs(&self) -> Result<Vec<Job>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn update_job(&self, _id: i64, _changes: JobChanges) -> Result<Job, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn delete_job(&self, _id: i64) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn create_candidate(&self, _candidate: NewCandidate) -> Result<Candidate, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn get_candidate(&self, _id: i64) -> Result<Candidate, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn update_candidate(
        &self,
        _id: i64,
        _changes: CandidateChanges,
    ) -> Result<Candidate, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn delete_candidate(&self, _id: i64) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_health_reports_unavailable_store() {
    let state = AppState::new(Arc::new(UnreachableStore));
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
}

#[actix_web::test]
async fn test_store_failure_is_internal_error() {
    let state = AppState::new(Arc::new(UnreachableStore));
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::get().uri("/candidates/1/matches").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.message, "A storage error occurred");
}

#[actix_web::test]
async fn test_job_crud() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    let req = test::TestRequest::post()
        .uri("/jobs")
        .set_json(json!({
            "title": "Software Engineer",
            "description": "Build amazing software",
            "required_skills": ["Python", "FastAPI"],
            "min_years_experience": 2
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Job = test::read_body_json(resp).await;
    assert_eq!(created.required_skills, vec!["Python", "FastAPI"]);

    let req = test::TestRequest::put()
        .uri(&format!("/jobs/{}", created.id))
        .set_json(json!({"title": "Senior Software Engineer", "min_years_experience": 5}))
        .to_request();
    let updated: Job = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.title, "Senior Software Engineer");
    assert_eq!(updated.min_years_experience, 5);
    assert_eq!(updated.description, "Build amazing software");

    let req = test::TestRequest::get().uri("/jobs").to_request();
    let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(jobs.len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/jobs/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/jobs/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.message, format!("Job with id {} not found", created.id));
    assert_eq!(err.status_code, 404);
}

#[actix_web::test]
async fn test_list_jobs_pagination() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    for i in 1..=3 {
        let req = test::TestRequest::post()
            .uri("/jobs")
            .set_json(json!({
                "title": format!("Job {}", i),
                "description": "Desc",
                "required_skills": [],
                "min_years_experience": 0
            }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/jobs?skip=1&limit=1").to_request();
    let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Job 2");

    let req = test::TestRequest::get().uri("/jobs?limit=0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_candidate_crud() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    let req = test::TestRequest::post()
        .uri("/candidates")
        .set_json(json!({"name": "John Doe", "skills": ["Python"], "years_experience": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Candidate = test::read_body_json(resp).await;

    let req = test::TestRequest::put()
        .uri(&format!("/candidates/{}", created.id))
        .set_json(json!({"name": "Jane Doe"}))
        .to_request();
    let updated: Candidate = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.years_experience, 3);

    let req = test::TestRequest::delete()
        .uri(&format!("/candidates/{}", created.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/candidates/{}", created.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_negative_experience_is_rejected() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    let req = test::TestRequest::post()
        .uri("/candidates")
        .set_json(json!({"name": "John Doe", "skills": [], "years_experience": -1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/jobs")
        .set_json(json!({
            "title": "Job",
            "description": "Desc",
            "required_skills": [],
            "min_years_experience": -2
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_experience_beyond_column_range_is_rejected() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    let req = test::TestRequest::post()
        .uri("/candidates")
        .set_json(json!({"name": "John Doe", "skills": [], "years_experience": 5_000_000_000i64}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/jobs")
        .set_json(json!({
            "title": "Job",
            "description": "Desc",
            "required_skills": [],
            "min_years_experience": 2_147_483_648i64
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored by the rejected requests
    let req = test::TestRequest::get().uri("/jobs").to_request();
    let jobs: Vec<Job> = test::call_and_read_body_json(&app, req).await;
    assert!(jobs.is_empty());

    let req = test::TestRequest::post()
        .uri("/candidates")
        .set_json(json!({"name": "Max", "skills": [], "years_experience": 2_147_483_647i64}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let candidate: Candidate = test::read_body_json(resp).await;
    assert_eq!(candidate.years_experience, 2_147_483_647);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    let req = test::TestRequest::post()
        .uri("/jobs")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.error, "invalid_json");
}

#[actix_web::test]
async fn test_candidate_matches() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    let jobs = [
        (vec!["Python"], 2),
        (vec!["Python", "Docker", "FastAPI"], 2),
        (vec!["Python", "Docker"], 2),
    ];
    for (skills, min_years) in jobs {
        let req = test::TestRequest::post()
            .uri("/jobs")
            .set_json(json!({
                "title": skills.join(" + "),
                "description": "Desc",
                "required_skills": skills,
                "min_years_experience": min_years
            }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri("/candidates")
        .set_json(json!({"name": "John Doe", "skills": ["Python", "Docker"], "years_experience": 3}))
        .to_request();
    let candidate: Candidate = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/candidates/{}/matches", candidate.id))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    // Wire names are camelCase
    assert_eq!(body[0]["jobId"], 1);
    assert_eq!(body[0]["matchScore"], 100);
    assert!(body[0].get("requiredSkills").is_some());
    assert!(body[0].get("minYearsExperience").is_some());

    let matches: Vec<JobMatch> = serde_json::from_value(body).unwrap();
    let ranked: Vec<(i64, u8)> = matches.iter().map(|m| (m.job_id, m.match_score)).collect();
    assert_eq!(ranked, vec![(1, 100), (3, 100), (2, 77)]);
}

#[actix_web::test]
async fn test_matches_for_unknown_candidate() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    let req = test::TestRequest::get().uri("/candidates/999/matches").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.message, "Candidate with id 999 not found");
}

#[actix_web::test]
async fn test_matches_with_no_jobs() {
    let app = test::init_service(App::new().configure(configure_app(state()))).await;

    let req = test::TestRequest::post()
        .uri("/candidates")
        .set_json(json!({"name": "John Doe", "skills": ["Python"], "years_experience": 0}))
        .to_request();
    let candidate: Candidate = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/candidates/{}/matches", candidate.id))
        .to_request();
    let matches: Vec<JobMatch> = test::call_and_read_body_json(&app, req).await;
    assert!(matches.is_empty());
}
