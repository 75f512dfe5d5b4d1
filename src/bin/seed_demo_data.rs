// ABOUTME: Demo data seeder for the bodylog service
// ABOUTME: Generates a deterministic random walk of measurements for one user
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo data seeder for the bodylog service.
//!
//! Populates the database with a realistic measurement history for report
//! and dashboard testing: a weight random walk with most days carrying one
//! morning measurement, some an extra evening one, and occasional gaps.
//!
//! Usage:
//! ```bash
//! # Seed 90 days for a fresh demo user
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific user and day count
//! cargo run --bin seed-demo-data -- --user-id <uuid> --days 30
//! ```

use anyhow::Result;
use bodylog::{config::ServerConfig, database::Database, logging};
use bodylog::intelligence::classify;
use bodylog::models::BodySample;
use chrono::{Duration, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

/// Demo user height; kept fixed so the walk only moves weight
const DEMO_HEIGHT_CM: f64 = 175.0;

/// Starting point of the weight walk
const DEMO_START_WEIGHT_KG: f64 = 78.0;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Bodylog demo data seeder",
    long_about = "Populate the database with a realistic measurement history for testing"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// User id to seed (a fresh one is generated if not specified)
    #[arg(long)]
    user_id: Option<Uuid>,

    /// Number of days of historical data to generate
    #[arg(long, default_value = "90")]
    days: u32,

    /// RNG seed for reproducible data
    #[arg(long, default_value = "4242")]
    seed: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    logging::init_from_env()?;

    let config = ServerConfig::from_env()?;
    let database_url = args.database_url.unwrap_or(config.database_url);
    let database = Database::new(&database_url).await?;

    let user_id = args.user_id.unwrap_or_else(Uuid::new_v4);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut weight_kg = DEMO_START_WEIGHT_KG;
    let now = Utc::now();

    let mut inserted = 0_u32;
    for days_ago in (0..args.days).rev() {
        // Most days one morning measurement, some an evening one, some none
        let measurements = match rng.gen_range(0_u8..10) {
            0 => 0,
            1..=7 => 1,
            _ => 2,
        };

        for slot in 0..measurements {
            weight_kg = (weight_kg + rng.gen_range(-0.4..0.4)).clamp(55.0, 110.0);
            let weight = (weight_kg * 10.0).round() / 10.0;

            let hour = if slot == 0 {
                rng.gen_range(6..11)
            } else {
                rng.gen_range(17..22)
            };
            let minute = rng.gen_range(0..60);
            let Some(recorded_at) = (now - Duration::days(i64::from(days_ago)))
                .date_naive()
                .and_hms_opt(hour, minute, 0)
                .map(|dt| dt.and_utc())
            else {
                continue;
            };

            let assessment = classify(weight, DEMO_HEIGHT_CM);
            let sample = BodySample {
                id: Uuid::new_v4(),
                user_id,
                weight_kg: weight,
                height_cm: DEMO_HEIGHT_CM,
                bmi: assessment.bmi,
                category: assessment.category,
                recorded_at,
                created_at: now,
            };

            database.insert_sample(&sample).await?;
            inserted += 1;
        }
    }

    info!(
        user.id = %user_id,
        samples = inserted,
        days = args.days,
        "demo data seeded"
    );
    println!("Seeded {inserted} samples for user {user_id}");
    println!("Try: GET /api/users/{user_id}/reports?granularity=monthly");

    Ok(())
}
