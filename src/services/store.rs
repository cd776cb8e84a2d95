use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Candidate, CandidateChanges, Job, JobChanges, NewCandidate, NewJob};

/// Kind of record held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Job,
    Candidate,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Job => write!(f, "Job"),
            RecordKind::Candidate => write!(f, "Candidate"),
        }
    }
}

/// Errors that can occur when reading or writing records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} with id {id} not found")]
    NotFound { kind: RecordKind, id: i64 },

    #[error("SQLx error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Corrupt record: {0}")]
    Corrupt(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    pub fn job_not_found(id: i64) -> Self {
        StoreError::NotFound { kind: RecordKind::Job, id }
    }

    pub fn candidate_not_found(id: i64) -> Self {
        StoreError::NotFound { kind: RecordKind::Candidate, id }
    }
}

/// Persistence for jobs and candidates
///
/// Implementations hand out owned snapshots; the matching engine never sees
/// a live record. Lookups of unknown ids return [`StoreError::NotFound`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_job(&self, job: NewJob) -> Result<Job, StoreError>;

    async fn get_job(&self, id: i64) -> Result<Job, StoreError>;

    /// Jobs in id order, skipping `skip` and returning at most `limit`
    async fn list_jobs(&self, skip: i64, limit: i64) -> Result<Vec<Job>, StoreError>;

    /// Every job in id order
    async fn all_jobs(&self) -> Result<Vec<Job>, StoreError>;

    async fn update_job(&self, id: i64, changes: JobChanges) -> Result<Job, StoreError>;

    async fn delete_job(&self, id: i64) -> Result<(), StoreError>;

    async fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, StoreError>;

    async fn get_candidate(&self, id: i64) -> Result<Candidate, StoreError>;

    async fn update_candidate(
        &self,
        id: i64,
        changes: CandidateChanges,
    ) -> Result<Candidate, StoreError>;

    async fn delete_candidate(&self, id: i64) -> Result<(), StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
