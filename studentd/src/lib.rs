//! # studentd: a CRUD service for student records
//!
//! `studentd` exposes a small REST API over a single MongoDB collection of
//! student documents. Each student has a name, an age, and an embedded
//! address (city and country). Five endpoints cover the full lifecycle:
//! create, list with optional filters, fetch by id, partial update, and
//! delete.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and the official MongoDB driver for persistence. It is
//! strictly layered: handlers in [`api::handlers`] validate input and map
//! outcomes to HTTP responses, while the [`db`] module owns the physical
//! document representation behind the [`db::handlers::StudentStore`] trait.
//! The store handle is created once at startup and injected through
//! [`AppState`], which keeps handlers testable against a substitute backend.
//!
//! Every request is an independent, stateless transaction against exactly
//! one document. There is no cross-request ordering: concurrent updates to
//! the same id race at the storage layer and the last write wins.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use studentd::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = studentd::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     studentd::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options. The only required
//! value is the MongoDB connection string.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use crate::api::handlers::students;
use crate::db::handlers::{MongoStudents, StudentStore};
use crate::openapi::ApiDoc;
use axum::{
    Router,
    routing::{get, post},
};
pub use config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
///
/// Holds the single process-wide store handle and the loaded configuration.
/// The handle is safe for concurrent use; handlers never coordinate access
/// beyond what the driver provides.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
    pub config: Config,
}

/// Build the application router with all endpoints and middleware.
///
/// - The five student CRUD routes
/// - `/healthz` liveness endpoint
/// - API docs at `/docs` (raw document at `/api-docs/openapi.json`)
/// - Fully open CORS (all origins, methods, and headers)
/// - Request tracing
pub fn build_router(state: AppState) -> Router {
    let student_routes = Router::new()
        .route("/students", post(students::create_student).get(students::list_students))
        .route(
            "/students/{id}",
            get(students::fetch_student).patch(students::update_student).delete(students::delete_student),
        )
        .with_state(state);

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { axum::Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .merge(student_routes)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] connects to the document store
/// 2. **Serve**: [`Application::serve`] binds the TCP port and handles
///    requests until the shutdown future resolves
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance with all resources initialized.
    ///
    /// Connecting happens exactly once, here; an unreachable or malformed
    /// connection string fails startup instead of surfacing per-request.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = MongoStudents::connect(&config.database.url).await?;

        let state = AppState {
            store: Arc::new(store),
            config: config.clone(),
        };
        let router = build_router(state);

        Ok(Self { router, config })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("studentd listening on http://{bind_addr}");

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        info!("Shutdown complete");
        Ok(())
    }
}
