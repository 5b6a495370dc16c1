use thiserror::Error;

/// Unified error type for storage operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// A stored document violated the expected shape. This is a contract
    /// violation on the write path, not a client error.
    #[error("malformed stored document: {reason}")]
    Malformed { reason: String },

    /// Failed to serialize a value into its BSON representation
    #[error(transparent)]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// Driver-level failure (unreachable server, timeout, wire error)
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

/// Type alias for storage operation results
pub type Result<T> = std::result::Result<T, DbError>;
