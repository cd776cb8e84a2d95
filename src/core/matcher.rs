use crate::core::scoring::score_breakdown;
use crate::models::{Candidate, Job, JobMatch};

/// Score every job for a candidate and rank them
///
/// # Pipeline Stages
/// 1. Score each job in input order (no filtering)
/// 2. Sort by score, highest first
///
/// The sort is stable: jobs with equal scores keep their input order, which
/// for store listings is id order.
pub fn rank_jobs(candidate: &Candidate, jobs: &[Job]) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = jobs
        .iter()
        .map(|job| {
            let breakdown = score_breakdown(candidate, job);

            tracing::debug!(
                candidate_id = candidate.id,
                job_id = job.id,
                matched_skills = breakdown.matched_skills,
                skill_ratio = breakdown.skill_match_ratio,
                experience_ratio = breakdown.experience_match_ratio,
                score = breakdown.score,
                "Scored job"
            );

            JobMatch {
                job_id: job.id,
                title: job.title.clone(),
                required_skills: job.required_skills.clone(),
                min_years_experience: job.min_years_experience,
                match_score: breakdown.score,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    matches
}
