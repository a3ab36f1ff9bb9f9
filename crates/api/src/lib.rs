//! # Appointment Scheduling API
//!
//! The API crate provides the web server for the appointment scheduling
//! service. It exposes endpoints for booking appointments, listing open slots
//! and listing scheduled appointments.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Decode requests and delegate to the scheduling service
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment and business-hours configuration
//!
//! The API uses Axum as the web framework; storage is reached through the
//! Postgres repository of the db crate.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use apptsched_core::SchedulingService;
use apptsched_db::{repositories::PgAppointmentRepository, DbPool};
use axum::Router;
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Validation, availability and storage orchestration
    pub service: SchedulingService,
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Appointment endpoints
        .merge(routes::appointments::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = apptsched_api::config::ApiConfig::from_env()?;
/// let db_pool = apptsched_db::create_pool(&config.database_url).await?;
/// apptsched_api::start_server(config, db_pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let repo = Arc::new(PgAppointmentRepository::new(db_pool));
    let service = SchedulingService::new(repo, config.business_hours);
    info!(
        "Business hours: {:02}:00-{:02}:59 starts in {}, {} minute slots",
        config.business_hours.first_start_hour,
        config.business_hours.last_start_hour,
        config.business_hours.timezone.name(),
        config.business_hours.slot_minutes
    );

    let state = Arc::new(ApiState { service });
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<axum::http::HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid API_CORS_ORIGINS entry")?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower_http::timeout::TimeoutLayer::new(std::time::Duration::from_secs(
            config.request_timeout,
        )),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
