//! HTTP request handlers.
//!
//! Each handler is responsible for:
//! - Request validation and deserialization
//! - Building the storage operation and invoking the [`crate::db::handlers::StudentStore`]
//! - Mapping the outcome into a response or [`crate::errors::Error`]
//!
//! Handlers are stateless request/response transactions; there are no
//! multi-step workflows and nothing is retried.

pub mod students;
