//! Read-side lookups shared by the handlers. They work against any
//! [`Repository`] so both adapters answer them the same way.

use chrono::NaiveDate;
use uuid::Uuid;
use adslot_core::{
    errors::SlotResult,
    folder_path::is_correlatable,
    models::{booking::Booking, file::UploadedFile},
};

use crate::repository::Repository;

/// Bookings airing on `date`, earliest start first.
pub async fn bookings_on_date(
    repo: &dyn Repository<Booking>,
    date: NaiveDate,
) -> SlotResult<Vec<Booking>> {
    let mut bookings: Vec<Booking> = repo
        .list()
        .await?
        .into_iter()
        .filter(|booking| booking.broadcast_date == date)
        .collect();
    bookings.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    Ok(bookings)
}

pub async fn bookings_for_client(
    repo: &dyn Repository<Booking>,
    client_id: &str,
) -> SlotResult<Vec<Booking>> {
    let bookings = repo
        .list()
        .await?
        .into_iter()
        .filter(|booking| booking.client_id == client_id)
        .collect();
    Ok(newest_first(bookings))
}

pub async fn bookings_for_program(
    repo: &dyn Repository<Booking>,
    program_id: &str,
) -> SlotResult<Vec<Booking>> {
    let bookings = repo
        .list()
        .await?
        .into_iter()
        .filter(|booking| booking.program_id.as_deref() == Some(program_id))
        .collect();
    Ok(newest_first(bookings))
}

/// Bookings whose folder sits under `prefix` (`YYYYMMDD/HHMM`).
pub async fn bookings_in_folder(
    repo: &dyn Repository<Booking>,
    prefix: &str,
) -> SlotResult<Vec<Booking>> {
    let marker = format!("{}_", prefix);
    let mut bookings: Vec<Booking> = repo
        .list()
        .await?
        .into_iter()
        .filter(|booking| booking.folder_path.starts_with(&marker))
        .collect();
    bookings.sort_by(|a, b| a.folder_path.cmp(&b.folder_path));
    Ok(bookings)
}

/// Files stored under `prefix`, newest upload first.
pub async fn files_in_folder(
    repo: &dyn Repository<UploadedFile>,
    prefix: &str,
) -> SlotResult<Vec<UploadedFile>> {
    let marker = format!("{}_", prefix);
    let mut files: Vec<UploadedFile> = repo
        .list()
        .await?
        .into_iter()
        .filter(|file| file.folder_path.starts_with(&marker))
        .collect();
    files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    Ok(files)
}

/// Files linked to a booking directly or through its folder path. Fallback
/// paths never match by folder.
pub async fn files_for_booking(
    repo: &dyn Repository<UploadedFile>,
    booking_id: Uuid,
    folder_path: &str,
) -> SlotResult<Vec<UploadedFile>> {
    let by_folder = is_correlatable(folder_path);
    let mut files: Vec<UploadedFile> = repo
        .list()
        .await?
        .into_iter()
        .filter(|file| {
            file.booking_id == Some(booking_id) || (by_folder && file.folder_path == folder_path)
        })
        .collect();
    files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    Ok(files)
}

fn newest_first(mut bookings: Vec<Booking>) -> Vec<Booking> {
    bookings.sort_by(|a, b| {
        b.broadcast_date
            .cmp(&a.broadcast_date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    bookings
}
