use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CandidateChanges, JobChanges, NewCandidate, NewJob};

/// Request to create a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    #[serde(alias = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[validate(range(min = 0, max = 2147483647))]
    #[serde(alias = "minYearsExperience")]
    pub min_years_experience: i64,
}

impl CreateJobRequest {
    /// Convert a validated request into the store's input type
    pub fn into_new_job(self) -> NewJob {
        NewJob {
            title: self.title,
            description: self.description,
            required_skills: self.required_skills,
            min_years_experience: to_years(self.min_years_experience),
        }
    }
}

/// Request to update a job, absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "requiredSkills")]
    pub required_skills: Option<Vec<String>>,
    #[validate(range(min = 0, max = 2147483647))]
    #[serde(default, alias = "minYearsExperience")]
    pub min_years_experience: Option<i64>,
}

impl UpdateJobRequest {
    pub fn into_changes(self) -> JobChanges {
        JobChanges {
            title: self.title,
            description: self.description,
            required_skills: self.required_skills,
            min_years_experience: self.min_years_experience.map(to_years),
        }
    }
}

/// Request to create a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidateRequest {
    pub name: String,
    pub skills: Vec<String>,
    #[validate(range(min = 0, max = 2147483647))]
    #[serde(alias = "yearsExperience")]
    pub years_experience: i64,
}

impl CreateCandidateRequest {
    pub fn into_new_candidate(self) -> NewCandidate {
        NewCandidate {
            name: self.name,
            skills: self.skills,
            years_experience: to_years(self.years_experience),
        }
    }
}

/// Request to update a candidate, absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCandidateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[validate(range(min = 0, max = 2147483647))]
    #[serde(default, alias = "yearsExperience")]
    pub years_experience: Option<i64>,
}

impl UpdateCandidateRequest {
    pub fn into_changes(self) -> CandidateChanges {
        CandidateChanges {
            name: self.name,
            skills: self.skills,
            years_experience: self.years_experience.map(to_years),
        }
    }
}

/// Query parameters for listing jobs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListJobsQuery {
    #[serde(default)]
    #[validate(range(min = 0))]
    pub skip: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub limit: i64,
}

impl Default for ListJobsQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

fn default_limit() -> i64 {
    100
}

/// Upper bound for experience fields, the range of the Postgres INTEGER columns
pub const MAX_YEARS: i64 = i32::MAX as i64;

// Values are validated to 0..=MAX_YEARS, so the cast is lossless
fn to_years(value: i64) -> u32 {
    value.clamp(0, MAX_YEARS) as u32
}
