//! # Ad Slot API
//!
//! Web server for the radio ad slot booking service: broadcast calendars,
//! bookings with their slot folders, reference data and uploaded file
//! metadata.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Error mapping
//! - **Config**: Handle environment and application configuration
//!
//! Handlers only talk to storage through the [`Repository`] trait objects held
//! in [`ApiState`], so the same router runs on fixtures or PostgreSQL.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Error mapping shared by every handler
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue, Method, StatusCode},
    BoxError, Router,
};
use chrono::{Local, NaiveDate};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use adslot_core::models::{
    booking::Booking,
    client::{Agency, Client},
    file::UploadedFile,
    program::{Navigator, Program},
};
use adslot_db::{
    fixture::{FixtureRepository, Fixtures},
    repository::Repository,
};

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use adslot_api::{app, ApiState};
/// use adslot_db::fixture::Fixtures;
///
/// let state = ApiState::in_memory(Fixtures::embedded().unwrap(), 42);
/// let router = app(Arc::new(state));
/// ```
pub struct ApiState {
    pub clients: Arc<dyn Repository<Client>>,
    pub agencies: Arc<dyn Repository<Agency>>,
    pub programs: Arc<dyn Repository<Program>>,
    pub navigators: Arc<dyn Repository<Navigator>>,
    pub bookings: Arc<dyn Repository<Booking>>,
    pub files: Arc<dyn Repository<UploadedFile>>,
    /// Seed for the recent-folder listing
    pub demo_seed: u64,
    /// Fixed "today"; the local date when unset
    pub today: Option<NaiveDate>,
}

impl ApiState {
    /// Every repository backed by fixtures; bookings start empty.
    pub fn in_memory(fixtures: Fixtures, demo_seed: u64) -> Self {
        Self {
            clients: Arc::new(FixtureRepository::new(fixtures.clients)),
            agencies: Arc::new(FixtureRepository::new(fixtures.agencies)),
            programs: Arc::new(FixtureRepository::new(fixtures.programs)),
            navigators: Arc::new(FixtureRepository::new(fixtures.navigators)),
            bookings: Arc::new(FixtureRepository::<Booking>::empty()),
            files: Arc::new(FixtureRepository::new(fixtures.files)),
            demo_seed,
            today: None,
        }
    }

    pub fn with_bookings(mut self, bookings: Arc<dyn Repository<Booking>>) -> Self {
        self.bookings = bookings;
        self
    }

    pub fn with_files(mut self, files: Arc<dyn Repository<UploadedFile>>) -> Self {
        self.files = files;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// The application router without server-level layers.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Month grid and day timetable
        .merge(routes::calendar::routes())
        // Booking management endpoints
        .merge(routes::bookings::routes())
        // Clients, agencies, programs and navigators
        .merge(routes::reference::routes())
        // Slot folders and file metadata
        .merge(routes::files::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Installs the global tracing subscriber at the configured level.
pub fn init_tracing(config: &config::ApiConfig) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Starts the API server
///
/// Applies CORS, timeout and trace layers and serves until the listener
/// fails. Call [`init_tracing`] first to see request logs.
pub async fn start_server(config: config::ApiConfig, state: ApiState) -> Result<()> {
    let app = app(Arc::new(state));

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .wrap_err_with(|| format!("Invalid CORS origin {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app
        .layer(
            tower::ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|_: BoxError| async {
                    StatusCode::REQUEST_TIMEOUT
                }))
                .timeout(Duration::from_secs(config.request_timeout)),
        )
        .layer(TraceLayer::new_for_http());

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
