use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use adslot_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .wrap_err("DATABASE_URL environment variable must be set")?;

    tracing::info!("Connecting to database...");
    let db_pool = create_pool(&database_url).await?;

    // Creates the bookings and uploaded_files tables
    initialize_database(&db_pool).await?;

    Ok(())
}
