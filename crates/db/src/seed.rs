//! Demo data. Every random choice draws from a caller-supplied seeded
//! [`StdRng`], so the same seed and `today` always give the same output.

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use tracing::debug;
use adslot_core::{
    availability::programs_on_date,
    folder_path::folder_path_for,
    format::format_date_jp,
    models::{
        booking::{Booking, BookingStatus},
        client::Client,
        file::RecentFolder,
        program::Program,
    },
};

const RECENT_FOLDER_COUNT: i64 = 5;
const RECENT_FOLDER_STRIDE_DAYS: i64 = 3;
const DEMO_WINDOW_DAYS: i64 = 28;
const DEMO_DURATIONS: [u32; 4] = [5, 10, 15, 30];
const DEMO_CAMPAIGNS: [&str; 4] = [
    "夏の新商品プロモーション",
    "決算セール",
    "新店舗オープン告知",
    "周年記念キャンペーン",
];

pub fn demo_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Slot folders at 1, 4, 7, 10 and 13 days before `today`, each for a random
/// program airing that weekday and a random client.
pub fn recent_folders(
    today: NaiveDate,
    programs: &[Program],
    clients: &[Client],
    rng: &mut StdRng,
) -> Vec<RecentFolder> {
    let mut folders = Vec::new();

    for i in 0..RECENT_FOLDER_COUNT {
        let date = today - Duration::days(RECENT_FOLDER_STRIDE_DAYS * i + 1);
        let Some((program, time)) = pick_program(date, programs, rng) else {
            continue;
        };
        let Some(client) = clients.choose(rng) else {
            continue;
        };

        folders.push(RecentFolder {
            date: date.format("%Y%m%d").to_string(),
            time: time.format("%H%M").to_string(),
            date_label: format_date_jp(&date.to_string()),
            client_id: client.client_id.clone(),
            client_name: client.client_name.clone(),
            program_id: program.program_id.clone(),
            program_name: program.program_name.clone(),
            folder_path: folder_path_for(
                date,
                time,
                &client.client_id,
                Some(&program.program_id),
            ),
        });
    }

    folders
}

/// Up to `count` bookings within four weeks either side of `today`. Days with
/// no program on air are skipped rather than retried.
pub fn demo_bookings(
    today: NaiveDate,
    programs: &[Program],
    clients: &[Client],
    count: usize,
    rng: &mut StdRng,
) -> Vec<Booking> {
    let mut bookings = Vec::with_capacity(count);

    for _ in 0..count {
        let offset = rng.gen_range(-DEMO_WINDOW_DAYS..=DEMO_WINDOW_DAYS);
        let date = today + Duration::days(offset);
        let Some((program, time)) = pick_program(date, programs, rng) else {
            continue;
        };
        let Some(client) = clients.choose(rng) else {
            continue;
        };

        let status = if date < today {
            BookingStatus::Broadcasted
        } else if rng.gen_bool(0.7) {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Tentative
        };
        let duration_minutes = DEMO_DURATIONS[rng.gen_range(0..DEMO_DURATIONS.len())];
        let campaign_name = DEMO_CAMPAIGNS[rng.gen_range(0..DEMO_CAMPAIGNS.len())];

        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        let created_at = Utc.from_utc_datetime(&(today - Duration::days(30)).and_time(NaiveTime::MIN));

        bookings.push(Booking {
            id: uuid::Builder::from_random_bytes(bytes).into_uuid(),
            broadcast_date: date,
            start_time: time.format("%H:%M").to_string(),
            duration_minutes,
            client_id: client.client_id.clone(),
            program_id: Some(program.program_id.clone()),
            campaign_name: Some(campaign_name.to_string()),
            status,
            memo: None,
            folder_path: folder_path_for(date, time, &client.client_id, Some(&program.program_id)),
            created_at,
            updated_at: created_at,
        });
    }

    debug!("Generated {} demo bookings", bookings.len());
    bookings
}

/// A random program on air on `date`, with its start time.
fn pick_program<'a>(
    date: NaiveDate,
    programs: &'a [Program],
    rng: &mut StdRng,
) -> Option<(&'a Program, NaiveTime)> {
    let on_air = programs_on_date(date, programs);
    if on_air.is_empty() {
        return None;
    }
    let program = on_air[rng.gen_range(0..on_air.len())];
    let time = NaiveTime::parse_from_str(&program.start_time, "%H:%M").ok()?;
    Some((program, time))
}
