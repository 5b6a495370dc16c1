//! Persistence layer for the student collection.
//!
//! This module wraps a single MongoDB collection behind the
//! [`handlers::StudentStore`] trait. It owns the physical storage
//! representation (BSON documents keyed by `ObjectId`); the API layer owns
//! the wire representation and translates at the boundary.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ StudentStore│  (db::handlers - queries & updates)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - typed document records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   MongoDB   │
//! └─────────────┘
//! ```
//!
//! The store handle is created once at startup ([`handlers::MongoStudents::connect`])
//! and shared by all request handlers; the driver's client is internally
//! pooled and safe for concurrent use, so handlers never coordinate access.

pub mod errors;
pub mod handlers;
pub mod models;
