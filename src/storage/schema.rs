//! Database schema definitions

/// SQL to create the employees table.
///
/// AUTOINCREMENT keeps ids from being reused after the highest row is deleted.
pub const CREATE_EMPLOYEES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    position TEXT NOT NULL,
    salary REAL NOT NULL,
    city TEXT,
    pincode TEXT
)
"#;

/// Column list shared by every SELECT, in `row_to_employee` order
pub const EMPLOYEE_COLUMNS: &str = "id, name, position, salary, city, pincode";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_EMPLOYEES_TABLE]
}
