use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/bookings",
            get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
        )
        .route(
            "/api/bookings/:id",
            get(handlers::bookings::get_booking).put(handlers::bookings::update_booking),
        )
        .route("/api/bookings/:id/files", get(handlers::bookings::booking_files))
        .route("/api/folder-path", get(handlers::bookings::folder_path))
}
