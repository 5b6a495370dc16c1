//! Storage record structures matching the persisted document shape.
//!
//! These models define the physical representation owned by the persistence
//! layer. They are distinct from the API models in [`crate::api::models`],
//! which own the externally-facing representation; the two are translated
//! at every boundary crossing.

pub mod students;
