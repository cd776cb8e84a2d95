// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, CandidateChanges, Job, JobChanges, JobMatch, NewCandidate, NewJob, ScoreBreakdown};
pub use requests::{CreateCandidateRequest, CreateJobRequest, ListJobsQuery, UpdateCandidateRequest, UpdateJobRequest};
pub use responses::{ErrorResponse, HealthResponse};
