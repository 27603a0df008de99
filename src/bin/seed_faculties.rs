//! Import faculty members from a JSON file.
//!
//! Usage: `seed_faculties <file.json>` where the file holds
//! `[{"name": ..., "email": ..., "branch": ..., "phone": ...}]`.
//! Records whose e-mail already exists are skipped. New accounts get the
//! configured default faculty password.

use anyhow::{bail, Context};
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;

use smartboard_booking::{
    config::AppConfig, logging, models::user::CreateFaculty, repository::Repository, services::Services,
};

#[derive(Debug, Deserialize)]
struct FacultyRecord {
    name: String,
    email: String,
    branch: String,
    #[serde(default)]
    phone: Option<String>,
}

impl From<FacultyRecord> for CreateFaculty {
    fn from(record: FacultyRecord) -> Self {
        CreateFaculty {
            name: record.name,
            email: record.email,
            branch: record.branch,
            phone: record.phone,
            role: None,
            password: None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: seed_faculties <file.json>");
    };

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _log_guard = logging::init(&config.logging);

    let raw = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let records: Vec<FacultyRecord> =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path))?;

    tracing::info!("Seeding {} faculty record(s) from {}", records.len(), path);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let services = Services::new(Repository::new(pool), config.auth.clone());

    let mut inserted = 0usize;
    let mut skipped = 0usize;

    for record in records {
        let email = record.email.clone();
        if services.faculty.create_if_absent(&record.into()).await? {
            inserted += 1;
        } else {
            tracing::debug!(email = %email, "Faculty already exists, skipped");
            skipped += 1;
        }
    }

    tracing::info!(inserted, skipped, "Faculty seeding completed");

    Ok(())
}
