//! Tool Dispatch Layer
//!
//! A fixed table of named operations over an [`EmployeeStore`]. Each call
//! validates its arguments, makes exactly one store call, and turns the
//! outcome into a [`ToolResponse`]:
//! - `ok`: the operation happened
//! - `not_found`: the addressed id does not exist
//! - `invalid_arguments`: the store was never touched
//!
//! Only storage failures (and unknown tool names) come back as `Err`.

pub mod args;
pub mod catalog;

pub use catalog::{catalog, ToolSpec};

use std::str::FromStr;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::{Error, Result};
use crate::storage::EmployeeStore;
use args::{parse_args, AddEmployeeArgs, IdArgs, UpdateEmployeeArgs};

/// The operations exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    AddEmployee,
    UpdateEmployee,
    RemoveEmployee,
    GetEmployee,
    ListEmployees,
}

impl ToolName {
    /// Get the wire name of the tool
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::AddEmployee => "add_employee",
            ToolName::UpdateEmployee => "update_employee",
            ToolName::RemoveEmployee => "remove_employee",
            ToolName::GetEmployee => "get_employee",
            ToolName::ListEmployees => "list_employees",
        }
    }

    /// Get all tools
    pub fn all() -> &'static [ToolName] {
        &[
            ToolName::AddEmployee,
            ToolName::UpdateEmployee,
            ToolName::RemoveEmployee,
            ToolName::GetEmployee,
            ToolName::ListEmployees,
        ]
    }
}

impl FromStr for ToolName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ToolName::all()
            .iter()
            .copied()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| Error::UnknownTool(s.to_string()))
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome category of a tool call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Ok,
    NotFound,
    InvalidArguments,
}

/// Caller-facing result of a tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub status: ToolStatus,
    /// Human-readable confirmation or failure text
    pub message: String,
    /// Structured payload; `null` when there is nothing to return
    #[serde(default)]
    pub data: Value,
}

impl ToolResponse {
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self { status: ToolStatus::Ok, message: message.into(), data }
    }

    pub fn not_found(id: i64) -> Self {
        Self {
            status: ToolStatus::NotFound,
            message: format!("Employee with ID {} not found.", id),
            data: Value::Null,
        }
    }

    pub fn invalid(tool: ToolName, reason: impl std::fmt::Display) -> Self {
        Self {
            status: ToolStatus::InvalidArguments,
            message: format!("Invalid arguments for {}: {}", tool, reason),
            data: Value::Null,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ToolStatus::Ok
    }
}

/// Routes tool calls to an employee store
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn EmployeeStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Call a tool by its wire name
    pub fn call(&self, name: &str, arguments: Option<Value>) -> Result<ToolResponse> {
        let tool: ToolName = name.parse()?;
        self.call_tool(tool, arguments.unwrap_or(Value::Null))
    }

    /// Call a tool with a JSON argument object
    pub fn call_tool(&self, tool: ToolName, arguments: Value) -> Result<ToolResponse> {
        let _span = tracing::debug_span!("tool_call", tool = %tool).entered();

        let result = match tool {
            ToolName::AddEmployee => self.add_employee(arguments),
            ToolName::UpdateEmployee => self.update_employee(arguments),
            ToolName::RemoveEmployee => self.remove_employee(arguments),
            ToolName::GetEmployee => self.get_employee(arguments),
            ToolName::ListEmployees => self.list_employees(arguments),
        };

        match result {
            Ok(response) => {
                tracing::debug!(status = ?response.status, "{}", response.message);
                Ok(response)
            }
            // Fields the store refuses are still the caller's mistake
            Err(Error::Validation(reason)) => Ok(ToolResponse::invalid(tool, reason)),
            Err(e) => {
                tracing::warn!("{} failed: {}", tool, e);
                Err(e)
            }
        }
    }

    fn add_employee(&self, arguments: Value) -> Result<ToolResponse> {
        let fields = match parse_args::<AddEmployeeArgs>(arguments) {
            Ok(args) => args.into_fields(),
            Err(reason) => return Ok(ToolResponse::invalid(ToolName::AddEmployee, reason)),
        };
        if let Err(Error::Validation(reason)) = fields.validate() {
            return Ok(ToolResponse::invalid(ToolName::AddEmployee, reason));
        }

        let id = self.store.create(&fields)?;
        Ok(ToolResponse::ok(format!("Employee added with ID: {}", id), json!({ "id": id })))
    }

    fn update_employee(&self, arguments: Value) -> Result<ToolResponse> {
        let (id, fields) = match parse_args::<UpdateEmployeeArgs>(arguments) {
            Ok(args) => args.into_parts(),
            Err(reason) => return Ok(ToolResponse::invalid(ToolName::UpdateEmployee, reason)),
        };
        if let Err(Error::Validation(reason)) = fields.validate() {
            return Ok(ToolResponse::invalid(ToolName::UpdateEmployee, reason));
        }

        if self.store.update(id, &fields)? {
            Ok(ToolResponse::ok(format!("Employee updated with ID: {}", id), json!({ "id": id })))
        } else {
            Ok(ToolResponse::not_found(id))
        }
    }

    fn remove_employee(&self, arguments: Value) -> Result<ToolResponse> {
        let id = match parse_args::<IdArgs>(arguments) {
            Ok(args) => args.id,
            Err(reason) => return Ok(ToolResponse::invalid(ToolName::RemoveEmployee, reason)),
        };

        if self.store.delete(id)? {
            Ok(ToolResponse::ok(format!("Employee with ID {} removed.", id), json!({ "id": id })))
        } else {
            Ok(ToolResponse::not_found(id))
        }
    }

    fn get_employee(&self, arguments: Value) -> Result<ToolResponse> {
        let id = match parse_args::<IdArgs>(arguments) {
            Ok(args) => args.id,
            Err(reason) => return Ok(ToolResponse::invalid(ToolName::GetEmployee, reason)),
        };

        match self.store.get(id)? {
            Some(employee) => Ok(ToolResponse::ok(
                format!("Employee with ID {} found.", id),
                to_data(&employee),
            )),
            None => Ok(ToolResponse::not_found(id)),
        }
    }

    fn list_employees(&self, arguments: Value) -> Result<ToolResponse> {
        if !(arguments.is_null() || arguments.is_object()) {
            return Ok(ToolResponse::invalid(ToolName::ListEmployees, "arguments must be a JSON object"));
        }

        let employees = self.store.list()?;
        Ok(ToolResponse::ok(
            format!("Found {} employee(s).", employees.len()),
            to_data(&employees),
        ))
    }
}

// Employee only holds strings and numbers, so this cannot fail
fn to_data<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
