//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for the five student endpoints
//! - **[`models`]**: Request/response data structures for API communication
//! - **[`extract`]**: Request extractors that report failures through the
//!   crate's error taxonomy
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`; the
//! rendered docs are served at `/docs`.

pub mod extract;
pub mod handlers;
pub mod models;
