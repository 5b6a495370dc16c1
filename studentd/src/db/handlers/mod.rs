//! Storage access for the student collection.
//!
//! The [`StudentStore`] trait is the seam between route handlers and the
//! physical store. Handlers receive a store through [`crate::AppState`]
//! rather than reaching for a process-wide global, which keeps them testable
//! against a substitute backend.

pub mod students;

pub use students::{MAX_LIST_RESULTS, MongoStudents, StudentFilter, StudentStore};
