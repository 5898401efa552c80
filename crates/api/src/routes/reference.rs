use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/clients",
            get(handlers::clients::list_clients).post(handlers::clients::create_client),
        )
        .route("/api/clients/:id", get(handlers::clients::get_client))
        .route("/api/clients/:id/bookings", get(handlers::clients::client_bookings))
        .route("/api/agencies", get(handlers::clients::list_agencies))
        .route("/api/agencies/:id", get(handlers::clients::get_agency))
        .route("/api/programs", get(handlers::programs::list_programs))
        .route("/api/programs/notes", post(handlers::programs::import_notes))
        .route("/api/programs/:id", get(handlers::programs::get_program))
        .route("/api/programs/:id/schedule", get(handlers::programs::get_schedule))
        .route("/api/programs/:id/bookings", get(handlers::programs::program_bookings))
        .route("/api/navigators", get(handlers::navigators::list_navigators))
        .route("/api/navigators/:id", get(handlers::navigators::get_navigator))
}
