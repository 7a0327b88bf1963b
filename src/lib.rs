//! # Empstore - Employee Record Store
//!
//! A small persisted collection of employee records, exposed as a fixed set
//! of named tools that can be called directly, from the CLI, or by an agent.
//!
//! Empstore provides:
//! - SQLite-backed storage with engine-assigned, never-reused ids
//! - An in-memory store with the identical contract (for tests)
//! - A tool dispatch layer with argument validation and structured results
//! - MCP (stdio) and HTTP transports over the same dispatch layer

pub mod employee;
pub mod storage;
pub mod tools;
pub mod server;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use employee::{Employee, EmployeeFields};
pub use storage::{EmployeeStore, MemoryStore, SqliteDatabase, SqliteStore};
pub use tools::{Dispatcher, ToolName, ToolResponse, ToolStatus};

/// Result type alias for Empstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Empstore operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid employee: {0}")]
    Validation(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl Error {
    /// True when the persistence medium itself failed.
    ///
    /// These are the only errors that interrupt a tool call; validation and
    /// absence are reported as ordinary results.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Io(_) | Error::Unavailable(_))
    }
}
