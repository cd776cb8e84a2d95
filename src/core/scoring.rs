use std::collections::HashSet;

use crate::models::{Candidate, Job, ScoreBreakdown};

/// Weight of the skill match ratio, in percent of the final score
pub const SKILL_WEIGHT: u32 = 70;
/// Weight of the experience match ratio, in percent of the final score
pub const EXPERIENCE_WEIGHT: u32 = 30;

/// A ratio kept as an exact fraction so rounding never sees float error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fraction {
    numerator: u128,
    denominator: u128,
}

impl Fraction {
    const ZERO: Self = Self { numerator: 0, denominator: 1 };
    const ONE: Self = Self { numerator: 1, denominator: 1 };

    fn as_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Calculate a match score (0-100) for a candidate against a job
///
/// Scoring formula:
/// score = round((
///     skill_match_ratio * 0.7 +       # |candidate ∩ job| / |job|, 0 when the job lists no skills
///     experience_match_ratio * 0.3    # min(years / min_years, 1), 1 when no minimum
/// ) * 100)
///
/// Skills compare as exact, case-sensitive strings; duplicates and order are
/// ignored. Exact halves round up (23.5 -> 24).
pub fn calculate_match_score(candidate: &Candidate, job: &Job) -> u8 {
    score_breakdown(candidate, job).score
}

/// Same as [`calculate_match_score`] but also returns the ratios behind it
pub fn score_breakdown(candidate: &Candidate, job: &Job) -> ScoreBreakdown {
    let matched_skills = count_matched_skills(&candidate.skills, &job.required_skills);
    let skills = skill_fraction(matched_skills, &job.required_skills);
    let experience = experience_fraction(candidate.years_experience, job.min_years_experience);

    ScoreBreakdown {
        skill_match_ratio: skills.as_f64(),
        experience_match_ratio: experience.as_f64(),
        matched_skills,
        score: weighted_score(skills, experience),
    }
}

/// Share of the job's distinct required skills the candidate has (0-1)
pub fn skill_match_ratio(candidate_skills: &[String], job_skills: &[String]) -> f64 {
    let matched = count_matched_skills(candidate_skills, job_skills);
    skill_fraction(matched, job_skills).as_f64()
}

/// Experience credit, linear up to the job's minimum and capped at 1
pub fn experience_match_ratio(years_experience: u32, min_years_experience: u32) -> f64 {
    experience_fraction(years_experience, min_years_experience).as_f64()
}

#[inline]
fn count_matched_skills(candidate_skills: &[String], job_skills: &[String]) -> usize {
    let candidate_set: HashSet<&str> = candidate_skills.iter().map(String::as_str).collect();
    let job_set: HashSet<&str> = job_skills.iter().map(String::as_str).collect();

    job_set.intersection(&candidate_set).count()
}

#[inline]
fn skill_fraction(matched: usize, job_skills: &[String]) -> Fraction {
    let distinct = job_skills.iter().map(String::as_str).collect::<HashSet<_>>().len();

    // A job without stated requirements cannot be satisfied
    if distinct == 0 {
        return Fraction::ZERO;
    }

    Fraction {
        numerator: matched as u128,
        denominator: distinct as u128,
    }
}

#[inline]
fn experience_fraction(years_experience: u32, min_years_experience: u32) -> Fraction {
    if min_years_experience == 0 {
        return Fraction::ONE;
    }

    Fraction {
        numerator: years_experience.min(min_years_experience) as u128,
        denominator: min_years_experience as u128,
    }
}

/// round(70 * skills + 30 * experience), halves rounded up
#[inline]
fn weighted_score(skills: Fraction, experience: Fraction) -> u8 {
    let numerator = SKILL_WEIGHT as u128 * skills.numerator * experience.denominator
        + EXPERIENCE_WEIGHT as u128 * experience.numerator * skills.denominator;
    let denominator = skills.denominator * experience.denominator;

    let rounded = (2 * numerator + denominator) / (2 * denominator);

    rounded.min(100) as u8
}
