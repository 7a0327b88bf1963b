//! Tool catalog - names, descriptions and argument schemas

use serde::Serialize;
use serde_json::{json, Value};
use super::ToolName;

/// Published description of one tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON Schema of the argument object
    pub input_schema: Value,
}

fn record_properties() -> serde_json::Map<String, Value> {
    let mut props = serde_json::Map::new();
    props.insert("name".into(), json!({ "type": "string", "description": "Name of the employee." }));
    props.insert("position".into(), json!({ "type": "string", "description": "Role or designation of the employee." }));
    props.insert("salary".into(), json!({ "type": "number", "description": "Salary of the employee." }));
    props.insert("city".into(), json!({ "type": "string", "description": "City where the employee is located." }));
    props.insert("pincode".into(), json!({ "type": "string", "description": "Postal code of the employee's city, as text." }));
    props
}

fn id_property() -> Value {
    json!({ "type": "integer", "description": "ID of the employee." })
}

impl ToolName {
    pub fn description(&self) -> &'static str {
        match self {
            ToolName::AddEmployee => "Add a new employee and return confirmation with the assigned ID.",
            ToolName::UpdateEmployee => "Replace every field of an existing employee, addressed by ID.",
            ToolName::RemoveEmployee => "Remove an employee by ID.",
            ToolName::GetEmployee => "Get employee details by ID.",
            ToolName::ListEmployees => "Return all employees.",
        }
    }

    pub fn input_schema(&self) -> Value {
        match self {
            ToolName::AddEmployee => json!({
                "type": "object",
                "properties": record_properties(),
                "required": ["name", "position", "salary", "city", "pincode"]
            }),
            ToolName::UpdateEmployee => {
                let mut props = record_properties();
                props.insert("id".into(), id_property());
                json!({
                    "type": "object",
                    "properties": props,
                    "required": ["id", "name", "position", "salary", "city", "pincode"]
                })
            }
            ToolName::RemoveEmployee | ToolName::GetEmployee => json!({
                "type": "object",
                "properties": { "id": id_property() },
                "required": ["id"]
            }),
            ToolName::ListEmployees => json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    pub fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.as_str(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}

/// Every tool, in table order
pub fn catalog() -> Vec<ToolSpec> {
    ToolName::all().iter().map(ToolName::spec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names() {
        let names: Vec<&str> = catalog().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            ["add_employee", "update_employee", "remove_employee", "get_employee", "list_employees"]
        );
    }

    #[test]
    fn test_required_arguments() {
        let schema = ToolName::UpdateEmployee.input_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, ["id", "name", "position", "salary", "city", "pincode"]);
        assert_eq!(schema["properties"]["id"]["type"], "integer");
        assert_eq!(schema["properties"]["salary"]["type"], "number");
        assert_eq!(schema["properties"]["pincode"]["type"], "string");

        assert!(ToolName::ListEmployees.input_schema().get("required").is_none());
    }
}
