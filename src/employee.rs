//! Employee records
//!
//! `Employee` is the persisted entity; `EmployeeFields` carries the mutable
//! part of a record and is what `create` and `update` accept.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Assigned by the store at creation, never by the caller
    pub id: i64,
    pub name: String,
    /// Role or title
    pub position: String,
    pub salary: f64,
    pub city: Option<String>,
    /// Kept as text so leading zeros and non-numeric postal codes survive
    pub pincode: String,
}

impl Employee {
    /// Attach an id to a set of fields
    pub fn from_fields(id: i64, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            position: fields.position,
            salary: fields.salary,
            city: fields.city,
            pincode: fields.pincode,
        }
    }

    /// The mutable part of this record
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            position: self.position.clone(),
            salary: self.salary,
            city: self.city.clone(),
            pincode: self.pincode.clone(),
        }
    }
}

/// Every mutable field of an employee.
///
/// Updates are whole-record replacements, so this type is used for both
/// creating and updating a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub position: String,
    pub salary: f64,
    pub city: Option<String>,
    pub pincode: String,
}

impl EmployeeFields {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
        city: Option<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            salary,
            city,
            pincode: pincode.into(),
        }
    }

    /// Check the constraints every stored record must satisfy
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name must not be empty".to_string()));
        }
        if self.position.trim().is_empty() {
            return Err(Error::Validation("position must not be empty".to_string()));
        }
        if !self.salary.is_finite() {
            return Err(Error::Validation(format!(
                "salary must be a finite number, got {}",
                self.salary
            )));
        }
        Ok(())
    }
}
