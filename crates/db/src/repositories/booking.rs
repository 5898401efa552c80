use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;
use adslot_core::{
    errors::{SlotError, SlotResult},
    models::booking::Booking,
};

use super::map_sqlx_error;
use crate::{models::DbBooking, repository::Repository};

const COLUMNS: &str = "id, broadcast_date, start_time, duration_minutes, client_id, program_id, \
                       campaign_name, status, memo, folder_path, created_at, updated_at";

pub struct PgBookingRepository {
    pool: Pool<Postgres>,
}

impl PgBookingRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn into_booking(row: DbBooking) -> SlotResult<Booking> {
    Booking::try_from(row).map_err(SlotError::Database)
}

/// `duration_minutes` is an `INTEGER` column.
fn duration_column(minutes: u32) -> SlotResult<i32> {
    i32::try_from(minutes).map_err(|_| {
        SlotError::Validation(format!("Duration out of range: {} minutes", minutes))
    })
}

#[async_trait]
impl Repository<Booking> for PgBookingRepository {
    async fn find_by_id(&self, id: &str) -> SlotResult<Option<Booking>> {
        // Ids that are not UUIDs cannot exist in the table.
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        tracing::debug!("Getting booking by id: {}", id);

        let row = sqlx::query_as::<_, DbBooking>(&format!(
            "SELECT {} FROM bookings WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| SlotError::Database(err.into()))?;

        row.map(into_booking).transpose()
    }

    async fn list(&self) -> SlotResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, DbBooking>(&format!(
            "SELECT {} FROM bookings ORDER BY created_at",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|err| SlotError::Database(err.into()))?;

        rows.into_iter().map(into_booking).collect()
    }

    async fn create(&self, booking: Booking) -> SlotResult<Booking> {
        tracing::debug!(
            "Creating booking: id={}, date={}, client={}",
            booking.id,
            booking.broadcast_date,
            booking.client_id
        );
        let duration = duration_column(booking.duration_minutes)?;

        let row = sqlx::query_as::<_, DbBooking>(&format!(
            r#"
            INSERT INTO bookings ({})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            COLUMNS, COLUMNS
        ))
        .bind(booking.id)
        .bind(booking.broadcast_date)
        .bind(&booking.start_time)
        .bind(duration)
        .bind(&booking.client_id)
        .bind(&booking.program_id)
        .bind(&booking.campaign_name)
        .bind(booking.status.as_str())
        .bind(&booking.memo)
        .bind(&booking.folder_path)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error(err, "Booking", &booking.id.to_string()))?;

        into_booking(row)
    }

    async fn update(&self, booking: Booking) -> SlotResult<Booking> {
        let duration = duration_column(booking.duration_minutes)?;
        let row = sqlx::query_as::<_, DbBooking>(&format!(
            r#"
            UPDATE bookings
            SET broadcast_date = $2, start_time = $3, duration_minutes = $4, client_id = $5,
                program_id = $6, campaign_name = $7, status = $8, memo = $9,
                folder_path = $10, updated_at = $11
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(booking.id)
        .bind(booking.broadcast_date)
        .bind(&booking.start_time)
        .bind(duration)
        .bind(&booking.client_id)
        .bind(&booking.program_id)
        .bind(&booking.campaign_name)
        .bind(booking.status.as_str())
        .bind(&booking.memo)
        .bind(&booking.folder_path)
        .bind(booking.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| SlotError::Database(err.into()))?
        .ok_or_else(|| SlotError::NotFound(format!("Booking with ID {} not found", booking.id)))?;

        tracing::debug!("Booking updated successfully: id={}", booking.id);
        into_booking(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_column_rejects_values_past_i32() {
        assert_eq!(duration_column(1440).ok(), Some(1440));
        assert_eq!(duration_column(i32::MAX as u32).ok(), Some(i32::MAX));
        assert!(matches!(
            duration_column(3_000_000_000),
            Err(SlotError::Validation(_))
        ));
    }
}
