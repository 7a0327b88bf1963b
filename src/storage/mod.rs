//! Storage Layer - employee persistence
//!
//! System of record is SQLite with a single table:
//! - employees(id, name, position, salary, city, pincode)
//!
//! Every backend implements [`EmployeeStore`], so callers do not care whether
//! records live in a database file or in memory.

pub mod schema;
pub mod sqlite;
pub mod memory;

pub use sqlite::{SqliteStore, SqliteDatabase, DbStats};
pub use memory::MemoryStore;

use crate::Result;
use crate::employee::{Employee, EmployeeFields};

/// CRUD contract shared by every employee backend.
///
/// Absence is never an error: `get` returns `None`, `update` and `delete`
/// return `false`. Only a failing storage medium produces `Err`, apart from
/// `create`/`update` rejecting fields that fail validation.
pub trait EmployeeStore: Send + Sync {
    /// Insert a new record and return its freshly assigned id
    fn create(&self, fields: &EmployeeFields) -> Result<i64>;

    /// Fetch a record by id
    fn get(&self, id: i64) -> Result<Option<Employee>>;

    /// Replace every mutable field of an existing record. Never inserts.
    fn update(&self, id: i64, fields: &EmployeeFields) -> Result<bool>;

    /// Remove a record
    fn delete(&self, id: i64) -> Result<bool>;

    /// All current records, ordered by ascending id
    fn list(&self) -> Result<Vec<Employee>>;
}
