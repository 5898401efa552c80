use std::sync::Arc;

use chrono::Local;
use color_eyre::eyre::Result;
use tracing::info;
use adslot_api::{config::ApiConfig, init_tracing, start_server, ApiState};
use adslot_core::models::booking::Booking;
use adslot_db::{
    create_pool,
    fixture::{FixtureRepository, Fixtures},
    repositories::{PgBookingRepository, PgFileRepository},
    schema::initialize_database,
    seed::{demo_bookings, demo_rng},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load configuration (reads .env as well)
    let config = ApiConfig::from_env()?;
    init_tracing(&config)?;

    let fixtures = Fixtures::load(config.fixture_dir.as_deref())?;
    let state = ApiState::in_memory(fixtures.clone(), config.demo_seed);

    let state = match &config.database_url {
        Some(database_url) => {
            info!("Storing bookings and files in PostgreSQL");
            let db_pool = create_pool(database_url).await?;
            initialize_database(&db_pool).await?;
            state
                .with_bookings(Arc::new(PgBookingRepository::new(db_pool.clone())))
                .with_files(Arc::new(PgFileRepository::new(db_pool)))
        }
        None => {
            info!("DATABASE_URL not set, storing bookings in memory");
            let bookings = demo_bookings(
                Local::now().date_naive(),
                &fixtures.programs,
                &fixtures.clients,
                config.demo_bookings,
                &mut demo_rng(config.demo_seed),
            );
            if !bookings.is_empty() {
                info!("Seeded {} demo bookings", bookings.len());
            }
            state.with_bookings(Arc::new(FixtureRepository::<Booking>::new(bookings)))
        }
    };

    // Start API server
    start_server(config, state).await?;

    Ok(())
}
