use tabled::{settings::Style, Table, Tabled};
use crate::employee::Employee;

#[derive(Tabled)]
pub struct EmployeeRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Position")]
    pub position: String,
    #[tabled(rename = "Salary")]
    pub salary: String,
    #[tabled(rename = "City")]
    pub city: String,
    #[tabled(rename = "Pincode")]
    pub pincode: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            position: employee.position.clone(),
            salary: format!("{:.2}", employee.salary),
            city: employee.city.clone().unwrap_or_else(|| "-".to_string()),
            pincode: employee.pincode.clone(),
        }
    }
}

/// One row per employee
pub fn employee_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return String::new();
    }
    let rows: Vec<EmployeeRow> = employees.iter().map(EmployeeRow::from).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<FieldRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(FieldRow {
            field: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Field/value card for a single employee
pub fn record_table(employee: &Employee) -> String {
    let row = EmployeeRow::from(employee);
    let mut builder = TableBuilder::new();
    builder.add_row("ID", &row.id.to_string());
    builder.add_row("Name", &row.name);
    builder.add_row("Position", &row.position);
    builder.add_row("Salary", &row.salary);
    builder.add_row("City", &row.city);
    builder.add_row("Pincode", &row.pincode);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: 7,
            name: "John Doe".to_string(),
            position: "Software Engineer".to_string(),
            salary: 75000.0,
            city: None,
            pincode: "00501".to_string(),
        }
    }

    #[test]
    fn test_employee_table_contents() {
        let table = employee_table(&[sample()]);
        assert!(table.contains("John Doe"));
        assert!(table.contains("75000.00"));
        assert!(table.contains("00501"));
        assert!(employee_table(&[]).is_empty());
    }

    #[test]
    fn test_record_table_marks_missing_city() {
        let table = record_table(&sample());
        assert!(table.contains("City"));
        assert!(table.contains("-"));
    }
}
