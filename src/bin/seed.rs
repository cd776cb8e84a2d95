//! Sample data loader for the job matching service
//!
//! Seeds the configured record store with the sample jobs and candidates.
//! Only useful with the postgres backend; the memory backend is discarded
//! when this process exits (use `store.seed_on_startup` for it instead).
//!
//! Run: cargo run --bin seed

use job_match::config::{Settings, StoreBackend};
use job_match::services::{seed_store, PostgresStore};
use job_match::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let settings = Settings::load()?;
    init_tracing(&settings.logging);

    if settings.store.backend != StoreBackend::Postgres {
        tracing::warn!("store.backend is not postgres; seeding the database configured under [database] anyway");
    }

    let store = PostgresStore::from_settings(&settings.database).await?;
    let summary = seed_store(&store).await?;

    println!("Created {} jobs", summary.jobs.len());
    for job in &summary.jobs {
        println!(
            "  {}. {} - Requires: {} ({}+ years)",
            job.id,
            job.title,
            job.required_skills.join(", "),
            job.min_years_experience
        );
    }

    println!("\nCreated {} candidates", summary.candidates.len());
    for candidate in &summary.candidates {
        println!(
            "  {}. {} - {} ({} years)",
            candidate.id,
            candidate.name,
            candidate.skills.join(", "),
            candidate.years_experience
        );
    }

    Ok(())
}
