use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Candidate, CandidateChanges, Job, JobChanges, NewCandidate, NewJob};
use crate::services::store::{RecordStore, StoreError};

#[derive(Default)]
struct Tables {
    jobs: BTreeMap<i64, Job>,
    candidates: BTreeMap<i64, Candidate>,
    last_job_id: i64,
    last_candidate_id: i64,
}

/// In-process record store
///
/// Ids start at 1 and are never reused after a delete, matching the
/// behaviour of the Postgres sequences.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create_job(&self, job: NewJob) -> Result<Job, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_job_id += 1;

        let job = Job {
            id: tables.last_job_id,
            title: job.title,
            description: job.description,
            required_skills: job.required_skills,
            min_years_experience: job.min_years_experience,
        };
        tables.jobs.insert(job.id, job.clone());

        Ok(job)
    }

    async fn get_job(&self, id: i64) -> Result<Job, StoreError> {
        let tables = self.tables.read().await;
        tables
            .jobs
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::job_not_found(id))
    }

    async fn list_jobs(&self, skip: i64, limit: i64) -> Result<Vec<Job>, StoreError> {
        let tables = self.tables.read().await;
        let skip = usize::try_from(skip).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(tables.jobs.values().skip(skip).take(limit).cloned().collect())
    }

    async fn all_jobs(&self) -> Result<Vec<Job>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.jobs.values().cloned().collect())
    }

    async fn update_job(&self, id: i64, changes: JobChanges) -> Result<Job, StoreError> {
        let mut tables = self.tables.write().await;
        let job = tables
            .jobs
            .get_mut(&id)
            .ok_or_else(|| StoreError::job_not_found(id))?;

        changes.apply(job);
        Ok(job.clone())
    }

    async fn delete_job(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables
            .jobs
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::job_not_found(id))
    }

    async fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_candidate_id += 1;

        let candidate = Candidate {
            id: tables.last_candidate_id,
            name: candidate.name,
            skills: candidate.skills,
            years_experience: candidate.years_experience,
        };
        tables.candidates.insert(candidate.id, candidate.clone());

        Ok(candidate)
    }

    async fn get_candidate(&self, id: i64) -> Result<Candidate, StoreError> {
        let tables = self.tables.read().await;
        tables
            .candidates
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::candidate_not_found(id))
    }

    async fn update_candidate(
        &self,
        id: i64,
        changes: CandidateChanges,
    ) -> Result<Candidate, StoreError> {
        let mut tables = self.tables.write().await;
        let candidate = tables
            .candidates
            .get_mut(&id)
            .ok_or_else(|| StoreError::candidate_not_found(id))?;

        changes.apply(candidate);
        Ok(candidate.clone())
    }

    async fn delete_candidate(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables
            .candidates
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::candidate_not_found(id))
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
