use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

/// Creates the booking and file tables. Reference data (clients, programs and
/// so on) stays in fixtures and has no tables.
pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY,
            broadcast_date DATE NOT NULL,
            start_time VARCHAR(5) NOT NULL,
            duration_minutes INTEGER NOT NULL,
            client_id VARCHAR(64) NOT NULL,
            program_id VARCHAR(64) NULL,
            campaign_name VARCHAR(255) NULL,
            status VARCHAR(16) NOT NULL,
            memo TEXT NULL,
            folder_path VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_status CHECK (status IN ('confirmed', 'tentative', 'broadcasted', 'cancelled')),
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS uploaded_files (
            file_id UUID PRIMARY KEY,
            booking_id UUID NULL REFERENCES bookings(id),
            file_name VARCHAR(255) NOT NULL,
            file_type VARCHAR(127) NOT NULL,
            folder_path VARCHAR(255) NOT NULL,
            size_bytes BIGINT NOT NULL DEFAULT 0,
            uploaded_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            text_content TEXT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Several statements, so this goes through the simple query protocol.
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_broadcast_date ON bookings(broadcast_date);
        CREATE INDEX IF NOT EXISTS idx_bookings_client_id ON bookings(client_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_folder_path ON bookings(folder_path);
        CREATE INDEX IF NOT EXISTS idx_uploaded_files_folder_path ON uploaded_files(folder_path);
        CREATE INDEX IF NOT EXISTS idx_uploaded_files_booking_id ON uploaded_files(booking_id);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
