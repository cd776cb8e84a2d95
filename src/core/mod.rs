// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::rank_jobs;
pub use scoring::{calculate_match_score, experience_match_ratio, score_breakdown, skill_match_ratio};
