//! API request and response data models.
//!
//! These structures define the public API contract. They are deliberately
//! distinct from the storage records in [`crate::db::models`] so the wire
//! shape and the persisted shape can evolve independently; in particular,
//! identifiers cross the boundary as their 24-hex string form, never as raw
//! `ObjectId`s. All models carry `utoipa` annotations for the served API
//! docs.

pub mod students;
