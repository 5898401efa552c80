use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/files", post(handlers::files::register_file))
        .route("/api/files/recent", get(handlers::files::recent))
        .route("/api/files/:date/:time", get(handlers::files::slot_folder))
}
