//! Argument shapes for each tool
//!
//! Canonical names are `id`, `name`, `position`, `salary`, `city` and
//! `pincode`. The `emp_*` names used by earlier agent integrations are
//! accepted as aliases.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::employee::EmployeeFields;

#[derive(Debug, Deserialize)]
pub struct AddEmployeeArgs {
    #[serde(alias = "emp_name")]
    pub name: String,
    #[serde(alias = "emp_role")]
    pub position: String,
    #[serde(alias = "emp_salary")]
    pub salary: f64,
    #[serde(alias = "emp_city")]
    pub city: String,
    #[serde(alias = "emp_pincode")]
    pub pincode: String,
}

impl AddEmployeeArgs {
    pub fn into_fields(self) -> EmployeeFields {
        EmployeeFields::new(self.name, self.position, self.salary, Some(self.city), self.pincode)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeArgs {
    #[serde(alias = "emp_id")]
    pub id: i64,
    #[serde(alias = "emp_name")]
    pub name: String,
    #[serde(alias = "emp_role")]
    pub position: String,
    #[serde(alias = "emp_salary")]
    pub salary: f64,
    #[serde(alias = "emp_city")]
    pub city: String,
    #[serde(alias = "emp_pincode")]
    pub pincode: String,
}

impl UpdateEmployeeArgs {
    pub fn into_parts(self) -> (i64, EmployeeFields) {
        (
            self.id,
            EmployeeFields::new(self.name, self.position, self.salary, Some(self.city), self.pincode),
        )
    }
}

/// Arguments for tools addressed only by id
#[derive(Debug, Deserialize)]
pub struct IdArgs {
    #[serde(alias = "emp_id")]
    pub id: i64,
}

/// Decode a JSON argument object into a typed argument struct.
///
/// `null` is treated as an empty object so tools without arguments can be
/// called with none. Anything that is not an object is rejected.
pub fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, String> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        Value::Object(map) => Value::Object(map),
        other => return Err(format!("arguments must be a JSON object, got {}", kind_of(&other))),
    };
    serde_json::from_value(arguments).map_err(|e| e.to_string())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
