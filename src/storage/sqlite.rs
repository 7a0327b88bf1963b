//! SQLite storage implementation

use std::path::{Path, PathBuf};
use std::time::Duration;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::employee::{Employee, EmployeeFields};
use super::{schema, EmployeeStore};

/// Default time a connection waits on a locked database file (ms)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// SQLite-backed storage holding one open connection
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))
    }

    /// Open a database file, waiting up to `busy_timeout` for file locks
    pub fn open_with_timeout(path: &Path, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema. Safe to run on every open.
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Employee Operations ==========

    /// Insert a new employee and return the id SQLite assigned to it
    pub fn create_employee(&self, fields: &EmployeeFields) -> Result<i64> {
        fields.validate()?;
        self.conn.execute(
            r#"
            INSERT INTO employees (name, position, salary, city, pincode)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                fields.name,
                fields.position,
                fields.salary,
                fields.city,
                fields.pincode,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!("Created employee {}", id);
        Ok(id)
    }

    /// Get an employee by id
    pub fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
        let sql = format!("SELECT {} FROM employees WHERE id = ?1", schema::EMPLOYEE_COLUMNS);
        self.conn
            .query_row(&sql, [id], |row| self.row_to_employee(row))
            .optional()
            .map_err(Into::into)
    }

    /// Replace every mutable field of an employee; false if the id is absent
    pub fn update_employee(&self, id: i64, fields: &EmployeeFields) -> Result<bool> {
        fields.validate()?;
        let changed = self.conn.execute(
            r#"
            UPDATE employees
            SET name = ?1, position = ?2, salary = ?3, city = ?4, pincode = ?5
            WHERE id = ?6
            "#,
            params![
                fields.name,
                fields.position,
                fields.salary,
                fields.city,
                fields.pincode,
                id,
            ],
        )?;
        tracing::debug!("Updated employee {} ({} row(s))", id, changed);
        Ok(changed > 0)
    }

    /// Delete an employee; false if the id is absent
    pub fn delete_employee(&self, id: i64) -> Result<bool> {
        let changed = self.conn.execute("DELETE FROM employees WHERE id = ?1", [id])?;
        tracing::debug!("Deleted employee {} ({} row(s))", id, changed);
        Ok(changed > 0)
    }

    /// List every employee in id order
    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        let sql = format!("SELECT {} FROM employees ORDER BY id", schema::EMPLOYEE_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;

        // A row that fails to decode is a corrupt table, not a missing record
        let employees = stmt
            .query_map([], |row| self.row_to_employee(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(employees)
    }

    /// Count all employees
    pub fn count_employees(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        let max_id: Option<i64> = self
            .conn
            .query_row("SELECT MAX(id) FROM employees", [], |row| row.get(0))?;
        Ok(DbStats {
            employees: self.count_employees()?,
            max_id,
        })
    }

    /// Helper to convert a row to an Employee
    fn row_to_employee(&self, row: &rusqlite::Row) -> rusqlite::Result<Employee> {
        let pincode: Option<String> = row.get(5)?;
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            position: row.get(2)?,
            salary: row.get(3)?,
            city: row.get(4)?,
            pincode: pincode.unwrap_or_default(),
        })
    }
}

/// A database file that is opened afresh for every operation.
///
/// Each call builds its own [`SqliteStore`], runs the schema initializer, and
/// drops the connection before returning, on success and error alike. No
/// handle outlives the call that created it.
#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a scoped connection
    pub fn connect(&self) -> Result<SqliteStore> {
        SqliteStore::open_with_timeout(&self.path, self.busy_timeout)
    }
}

impl EmployeeStore for SqliteDatabase {
    fn create(&self, fields: &EmployeeFields) -> Result<i64> {
        self.connect()?.create_employee(fields)
    }

    fn get(&self, id: i64) -> Result<Option<Employee>> {
        self.connect()?.get_employee(id)
    }

    fn update(&self, id: i64, fields: &EmployeeFields) -> Result<bool> {
        self.connect()?.update_employee(id, fields)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        self.connect()?.delete_employee(id)
    }

    fn list(&self) -> Result<Vec<Employee>> {
        self.connect()?.list_employees()
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct DbStats {
    pub employees: usize,
    pub max_id: Option<i64>,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Employees: {}", self.employees)?;
        match self.max_id {
            Some(id) => write!(f, "  Highest ID: {}", id),
            None => write!(f, "  Highest ID: -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample(name: &str, pincode: &str) -> EmployeeFields {
        EmployeeFields::new(name, "Software Engineer", 75000.0, Some("New York".to_string()), pincode)
    }

    #[test]
    fn test_employee_crud() {
        let store = SqliteStore::open_in_memory().unwrap();

        let fields = sample("John Doe", "10001");
        let id = store.create_employee(&fields).unwrap();

        let retrieved = store.get_employee(id).unwrap().unwrap();
        assert_eq!(retrieved, Employee::from_fields(id, fields));

        let promoted = EmployeeFields::new(
            "John Doe",
            "Senior Software Engineer",
            80000.0,
            Some("New York".to_string()),
            "10001",
        );
        assert!(store.update_employee(id, &promoted).unwrap());
        let retrieved = store.get_employee(id).unwrap().unwrap();
        assert_eq!(retrieved.position, "Senior Software Engineer");
        assert_eq!(retrieved.salary, 80000.0);

        assert!(store.delete_employee(id).unwrap());
        assert!(store.get_employee(id).unwrap().is_none());
    }

    #[test]
    fn test_missing_id_is_not_an_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create_employee(&sample("Ann", "1")).unwrap();

        assert!(store.get_employee(999).unwrap().is_none());
        assert!(!store.update_employee(999, &sample("Bob", "2")).unwrap());
        assert!(!store.delete_employee(999).unwrap());
        assert_eq!(store.count_employees().unwrap(), 1);
    }

    #[test]
    fn test_update_is_not_upsert() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(!store.update_employee(1, &sample("Ghost", "0")).unwrap());
        assert_eq!(store.count_employees().unwrap(), 0);
    }

    #[test]
    fn test_update_clears_city() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.create_employee(&sample("Ann", "1")).unwrap();

        let moved = EmployeeFields::new("Ann", "Software Engineer", 75000.0, None, "1");
        assert!(store.update_employee(id, &moved).unwrap());
        assert_eq!(store.get_employee(id).unwrap().unwrap().city, None);
    }

    #[test]
    fn test_pincode_keeps_leading_zero() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.create_employee(&sample("Ann", "00501")).unwrap();
        assert_eq!(store.get_employee(id).unwrap().unwrap().pincode, "00501");
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = SqliteStore::open_in_memory().unwrap();
        let first = store.create_employee(&sample("Ann", "1")).unwrap();
        let second = store.create_employee(&sample("Bob", "2")).unwrap();
        assert!(store.delete_employee(second).unwrap());

        let third = store.create_employee(&sample("Cat", "3")).unwrap();
        assert!(third > second);
        assert!(second > first);
    }

    #[test]
    fn test_list_in_id_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        let ids: Vec<i64> = ["Cat", "Ann", "Bob"]
            .iter()
            .map(|name| store.create_employee(&sample(name, "1")).unwrap())
            .collect();

        let listed: Vec<i64> = store.list_employees().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_invalid_fields_rejected_before_insert() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = store.create_employee(&sample("", "1"));
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(store.count_employees().unwrap(), 0);
    }

    #[test]
    fn test_stats() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.stats().unwrap().max_id, None);

        store.create_employee(&sample("Ann", "1")).unwrap();
        let id = store.create_employee(&sample("Bob", "2")).unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.employees, 2);
        assert_eq!(stats.max_id, Some(id));
    }

    #[test]
    fn test_database_persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let db = SqliteDatabase::new(dir.path().join("employees.db"));

        let id = db.create(&sample("John Doe", "10001")).unwrap();
        // A fresh connection sees the committed row
        let fetched = db.get(id).unwrap().unwrap();
        assert_eq!(fetched.name, "John Doe");
        assert_eq!(db.list().unwrap().len(), 1);
    }

    #[test]
    fn test_database_rejects_invalid_fields() {
        let dir = tempfile::tempdir().unwrap();
        let db = SqliteDatabase::new(dir.path().join("employees.db"));
        assert_eq!(db.path(), dir.path().join("employees.db"));

        let id = db.create(&sample("Ann", "1")).unwrap();
        let blank = EmployeeFields::new("Ann", " ", 1.0, None, "1");
        assert!(matches!(db.create(&blank), Err(Error::Validation(_))));
        assert!(matches!(db.update(id, &blank), Err(Error::Validation(_))));
        assert_eq!(db.get(id).unwrap().unwrap().position, "Software Engineer");
        assert_eq!(db.list().unwrap().len(), 1);
    }

    #[test]
    fn test_schema_init_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.db");
        let id = SqliteStore::open(&path).unwrap().create_employee(&sample("Ann", "1")).unwrap();

        let reopened = SqliteStore::open(&path).unwrap();
        assert!(reopened.get_employee(id).unwrap().is_some());
    }

    #[test]
    fn test_unopenable_database_is_storage_failure() {
        let dir = tempfile::tempdir().unwrap();
        let db = SqliteDatabase::new(dir.path().join("no/such/dir/employees.db"));

        let err = db.get(1).unwrap_err();
        assert!(err.is_storage_failure());
    }
}
