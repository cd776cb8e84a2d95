use crate::models::{Candidate, Job, NewCandidate, NewJob};
use crate::services::store::{RecordStore, StoreError};

/// (title, description, required skills, minimum years)
const SAMPLE_JOBS: &[(&str, &str, &[&str], u32)] = &[
    (
        "Senior Python Developer",
        "We are looking for an experienced Python developer to join our backend team. You'll work on building scalable APIs and microservices.",
        &["Python", "FastAPI", "Docker", "PostgreSQL", "AWS"],
        5,
    ),
    (
        "Full Stack Engineer",
        "Join our team to build modern web applications using React and Python. Experience with both frontend and backend is required.",
        &["Python", "JavaScript", "React", "FastAPI", "Docker"],
        3,
    ),
    (
        "DevOps Engineer",
        "Looking for a DevOps engineer to manage our cloud infrastructure and CI/CD pipelines.",
        &["Docker", "Kubernetes", "AWS", "Terraform", "CI/CD"],
        4,
    ),
    (
        "Junior Software Engineer",
        "Great opportunity for a junior developer to learn and grow. We'll provide mentorship and training.",
        &["Python", "JavaScript"],
        1,
    ),
    (
        "Machine Learning Engineer",
        "Work on cutting-edge ML models and deploy them to production. Experience with PyTorch or TensorFlow required.",
        &["Python", "PyTorch", "TensorFlow", "Docker", "AWS"],
        3,
    ),
    (
        "Backend API Developer",
        "Build robust RESTful APIs and microservices. Experience with FastAPI or Flask required.",
        &["Python", "FastAPI", "PostgreSQL", "Docker"],
        2,
    ),
    (
        "Frontend Developer",
        "Create beautiful and responsive user interfaces. Strong React and CSS skills required.",
        &["JavaScript", "React", "CSS", "HTML"],
        2,
    ),
    (
        "Cloud Architect",
        "Design and implement cloud infrastructure solutions. Deep AWS knowledge required.",
        &["AWS", "Terraform", "Docker", "Kubernetes", "CI/CD"],
        6,
    ),
];

/// (name, skills, years of experience)
const SAMPLE_CANDIDATES: &[(&str, &[&str], u32)] = &[
    ("Alice Johnson", &["Python", "FastAPI", "Docker", "PostgreSQL", "AWS"], 6),
    ("Bob Smith", &["Python", "JavaScript", "React", "FastAPI"], 4),
    ("Charlie Brown", &["Docker", "Kubernetes", "AWS", "Terraform"], 5),
    ("Diana Prince", &["Python", "JavaScript"], 1),
    ("Eve Williams", &["Python", "PyTorch", "TensorFlow", "Docker"], 3),
    ("Frank Miller", &["Python", "FastAPI", "Docker"], 2),
    ("Grace Lee", &["JavaScript", "React", "CSS", "HTML"], 3),
    ("Henry Davis", &["AWS", "Docker", "Kubernetes"], 7),
    ("Iris Chen", &["Python", "FastAPI", "PostgreSQL", "Docker", "AWS"], 4),
    ("Jack Wilson", &["Python", "Docker"], 1),
];

/// Records created by [`seed_store`]
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
}

fn to_strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Insert the sample catalogue of jobs and candidates
pub async fn seed_store(store: &dyn RecordStore) -> Result<SeedSummary, StoreError> {
    let mut summary = SeedSummary::default();

    for (title, description, skills, min_years) in SAMPLE_JOBS {
        let job = store
            .create_job(NewJob {
                title: title.to_string(),
                description: description.to_string(),
                required_skills: to_strings(skills),
                min_years_experience: *min_years,
            })
            .await?;
        tracing::debug!(job_id = job.id, "Seeded job: {}", job.title);
        summary.jobs.push(job);
    }

    for (name, skills, years) in SAMPLE_CANDIDATES {
        let candidate = store
            .create_candidate(NewCandidate {
                name: name.to_string(),
                skills: to_strings(skills),
                years_experience: *years,
            })
            .await?;
        tracing::debug!(candidate_id = candidate.id, "Seeded candidate: {}", candidate.name);
        summary.candidates.push(candidate);
    }

    tracing::info!(
        "Seeded {} jobs and {} candidates",
        summary.jobs.len(),
        summary.candidates.len()
    );

    Ok(summary)
}
