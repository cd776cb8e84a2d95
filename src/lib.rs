//! Job Match - candidate to job matching service
//!
//! This library provides the scoring and ranking engine that orders job
//! postings for a candidate, plus the record store and HTTP layer around it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, rank_jobs, score_breakdown};
pub use error::AppError;
pub use models::{Candidate, Job, JobMatch, ScoreBreakdown};
pub use services::{MemoryStore, PostgresStore, RecordStore, StoreError};
