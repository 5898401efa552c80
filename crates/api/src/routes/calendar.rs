use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/calendar/:year/:month", get(handlers::calendar::get_month))
        .route("/api/calendar/:year/:month/:day", get(handlers::calendar::get_day))
}
