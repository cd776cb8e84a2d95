use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::models::{Candidate, CandidateChanges, Job, JobChanges, NewCandidate, NewJob};
use crate::services::store::{RecordStore, StoreError};

const JOB_COLUMNS: &str = "id, title, description, required_skills, min_years_experience";
const CANDIDATE_COLUMNS: &str = "id, name, skills, years_experience";

/// PostgreSQL-backed record store
///
/// Skill lists live in `TEXT[]` columns; experience columns carry
/// `CHECK (... >= 0)` constraints. Migrations in `./migrations` run on
/// connect.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect to PostgreSQL and run pending migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a store from the `[database]` settings section
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        tracing::info!(
            max_connections = settings.max_connections,
            "Connecting to PostgreSQL"
        );

        Self::new(
            &settings.url,
            settings.max_connections,
            settings.min_connections,
            Duration::from_secs(settings.acquire_timeout_secs),
            Duration::from_secs(settings.idle_timeout_secs),
        )
        .await
    }
}

fn job_from_row(row: &PgRow) -> Result<Job, StoreError> {
    Ok(Job {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        required_skills: row.try_get("required_skills")?,
        min_years_experience: years_from_column(row.try_get("min_years_experience")?)?,
    })
}

fn candidate_from_row(row: &PgRow) -> Result<Candidate, StoreError> {
    Ok(Candidate {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        skills: row.try_get("skills")?,
        years_experience: years_from_column(row.try_get("years_experience")?)?,
    })
}

fn years_from_column(value: i32) -> Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| StoreError::Corrupt(format!("negative experience value {}", value)))
}

fn years_to_column(value: u32) -> Result<i32, StoreError> {
    i32::try_from(value).map_err(|_| StoreError::InvalidInput(format!("experience value {} is too large", value)))
}

#[async_trait]
impl RecordStore for PostgresStore {
    async fn create_job(&self, job: NewJob) -> Result<Job, StoreError> {
        let query = format!(
            r#"
            INSERT INTO jobs (title, description, required_skills, min_years_experience)
            VALUES ($1, $2, $3, $4)
            RETURNING {JOB_COLUMNS}
            "#
        );

        let row = sqlx::query(&query)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.required_skills)
            .bind(years_to_column(job.min_years_experience)?)
            .fetch_one(&self.pool)
            .await?;

        job_from_row(&row)
    }

    async fn get_job(&self, id: i64) -> Result<Job, StoreError> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::job_not_found(id))?;

        job_from_row(&row)
    }

    async fn list_jobs(&self, skip: i64, limit: i64) -> Result<Vec<Job>, StoreError> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id LIMIT $1 OFFSET $2");

        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(job_from_row).collect()
    }

    async fn all_jobs(&self) -> Result<Vec<Job>, StoreError> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id");

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        rows.iter().map(job_from_row).collect()
    }

    async fn update_job(&self, id: i64, changes: JobChanges) -> Result<Job, StoreError> {
        let query = format!(
            r#"
            UPDATE jobs SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                required_skills = COALESCE($4, required_skills),
                min_years_experience = COALESCE($5, min_years_experience)
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#
        );

        let min_years = changes.min_years_experience.map(years_to_column).transpose()?;

        let row = sqlx::query(&query)
            .bind(id)
            .bind(changes.title)
            .bind(changes.description)
            .bind(changes.required_skills)
            .bind(min_years)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::job_not_found(id))?;

        job_from_row(&row)
    }

    async fn delete_job(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::job_not_found(id));
        }

        Ok(())
    }

    async fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate, StoreError> {
        let query = format!(
            r#"
            INSERT INTO candidates (name, skills, years_experience)
            VALUES ($1, $2, $3)
            RETURNING {CANDIDATE_COLUMNS}
            "#
        );

        let row = sqlx::query(&query)
            .bind(&candidate.name)
            .bind(&candidate.skills)
            .bind(years_to_column(candidate.years_experience)?)
            .fetch_one(&self.pool)
            .await?;

        candidate_from_row(&row)
    }

    async fn get_candidate(&self, id: i64) -> Result<Candidate, StoreError> {
        let query = format!("SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = $1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::candidate_not_found(id))?;

        candidate_from_row(&row)
    }

    async fn update_candidate(
        &self,
        id: i64,
        changes: CandidateChanges,
    ) -> Result<Candidate, StoreError> {
        let query = format!(
            r#"
            UPDATE candidates SET
                name = COALESCE($2, name),
                skills = COALESCE($3, skills),
                years_experience = COALESCE($4, years_experience)
            WHERE id = $1
            RETURNING {CANDIDATE_COLUMNS}
            "#
        );

        let years = changes.years_experience.map(years_to_column).transpose()?;

        let row = sqlx::query(&query)
            .bind(id)
            .bind(changes.name)
            .bind(changes.skills)
            .bind(years)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::candidate_not_found(id))?;

        candidate_from_row(&row)
    }

    async fn delete_candidate(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::candidate_not_found(id));
        }

        Ok(())
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
