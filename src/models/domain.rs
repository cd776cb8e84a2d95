use serde::{Deserialize, Serialize};

/// A job posting as held by the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(alias = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[serde(alias = "minYearsExperience")]
    pub min_years_experience: u32,
}

/// A job seeker as held by the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub skills: Vec<String>,
    #[serde(alias = "yearsExperience")]
    pub years_experience: u32,
}

/// Fields needed to create a job; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub min_years_experience: u32,
}

/// Partial job update, `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub min_years_experience: Option<u32>,
}

impl JobChanges {
    pub fn apply(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(skills) = self.required_skills {
            job.required_skills = skills;
        }
        if let Some(years) = self.min_years_experience {
            job.min_years_experience = years;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub name: String,
    pub skills: Vec<String>,
    pub years_experience: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateChanges {
    pub name: Option<String>,
    pub skills: Option<Vec<String>>,
    pub years_experience: Option<u32>,
}

impl CandidateChanges {
    pub fn apply(self, candidate: &mut Candidate) {
        if let Some(name) = self.name {
            candidate.name = name;
        }
        if let Some(skills) = self.skills {
            candidate.skills = skills;
        }
        if let Some(years) = self.years_experience {
            candidate.years_experience = years;
        }
    }
}

/// Scored job for one candidate, built per request and never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    #[serde(rename = "jobId")]
    pub job_id: i64,
    pub title: String,
    #[serde(rename = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[serde(rename = "minYearsExperience")]
    pub min_years_experience: u32,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Intermediate values behind a match score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub skill_match_ratio: f64,
    pub experience_match_ratio: f64,
    pub matched_skills: usize,
    pub score: u8,
}
