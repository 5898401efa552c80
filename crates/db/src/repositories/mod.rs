pub mod booking;
pub mod file;

pub use booking::PgBookingRepository;
pub use file::PgFileRepository;

use adslot_core::errors::SlotError;

/// Maps a sqlx failure onto the error kinds the repository contract promises.
pub(crate) fn map_sqlx_error(err: sqlx::Error, kind: &str, id: &str) -> SlotError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            SlotError::Conflict(format!("{} {} already exists", kind, id))
        }
        _ => SlotError::Database(err.into()),
    }
}
