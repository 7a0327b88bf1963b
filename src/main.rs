//! Empstore CLI - Command-line interface for the employee record store

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use empstore::config::{self, EmpstoreConfig};
use empstore::storage::{EmployeeStore, MemoryStore, SqliteDatabase};
use empstore::tools::{self, Dispatcher, ToolResponse, ToolStatus};
use empstore::ui::{self, Icons};
use empstore::Employee;
use serde_json::{json, Value};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "empstore")]
#[command(version)]
#[command(about = "Employee record store with a name-dispatched tool interface")]
#[command(long_about = r#"
Empstore keeps employee records in SQLite and exposes them as five tools:
  add_employee, update_employee, remove_employee, get_employee, list_employees

Example usage:
  empstore add --name "John Doe" --position "Software Engineer" --salary 75000 --city "New York" --pincode 10001
  empstore call get_employee --args '{"id": 1}'
  empstore mcp
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print raw tool responses as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Keep records in memory only (lost on exit)
    #[arg(long, global = true)]
    in_memory: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct RecordArgs {
    /// Employee name
    #[arg(long)]
    name: String,

    /// Role or title
    #[arg(long)]
    position: String,

    /// Salary
    #[arg(long)]
    salary: f64,

    /// City
    #[arg(long)]
    city: String,

    /// Postal code (kept as text)
    #[arg(long)]
    pincode: String,
}

impl RecordArgs {
    fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "position": self.position,
            "salary": self.salary,
            "city": self.city,
            "pincode": self.pincode,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file with the current database path
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Add a new employee
    Add {
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Show one employee
    Get {
        /// Employee ID
        id: i64,
    },

    /// Replace every field of an employee
    Update {
        /// Employee ID
        id: i64,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Remove an employee
    Remove {
        /// Employee ID
        id: i64,
    },

    /// List all employees
    List,

    /// Call a tool by name with JSON arguments
    Call {
        /// Tool name (see `empstore tools`)
        tool: String,

        /// Argument object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Print the tool catalog
    Tools,

    /// Show statistics about the database
    Stats,

    /// Serve the tools over MCP on stdio
    Mcp,

    /// Serve the tools over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout clean for MCP and --json
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?;
    let database = config::resolve_database_path(cli.database.clone(), file_config.as_ref());
    let busy_timeout = file_config.clone().unwrap_or_default().busy_timeout();

    let db = SqliteDatabase::new(&database).with_busy_timeout(busy_timeout);
    let store: Arc<dyn EmployeeStore> = if cli.in_memory {
        Arc::new(MemoryStore::new())
    } else {
        config::ensure_db_dir(db.path())?;
        Arc::new(db.clone())
    };
    let dispatcher = Dispatcher::new(store);

    match cli.command {
        Commands::Init { force } => {
            let path = cli.config.clone().unwrap_or_else(config::default_config_path);
            let new_config = EmpstoreConfig {
                database: Some(database.display().to_string()),
                busy_timeout_ms: file_config.and_then(|c| c.busy_timeout_ms),
            };
            config::write_config(&path, &new_config, force)?;
            ui::success(&format!("Wrote config to {}", path.display()));
            ui::info(&format!("{} Database", Icons::DATABASE), &database.display().to_string());
        }

        Commands::Add { record } => {
            let response = dispatcher.call("add_employee", Some(record.to_json()))?;
            render(&response, cli.json)?;
        }

        Commands::Get { id } => {
            let response = dispatcher.call("get_employee", Some(json!({ "id": id })))?;
            render(&response, cli.json)?;
            if !cli.json && response.is_ok() {
                let employee: Employee = serde_json::from_value(response.data)?;
                println!("{}", ui::record_table(&employee));
            }
        }

        Commands::Update { id, record } => {
            let mut args = record.to_json();
            args["id"] = json!(id);
            let response = dispatcher.call("update_employee", Some(args))?;
            render(&response, cli.json)?;
        }

        Commands::Remove { id } => {
            let response = dispatcher.call("remove_employee", Some(json!({ "id": id })))?;
            render(&response, cli.json)?;
        }

        Commands::List => {
            let response = dispatcher.call("list_employees", None)?;
            if cli.json {
                render(&response, true)?;
            } else {
                let employees: Vec<Employee> = serde_json::from_value(response.data)?;
                ui::section(&format!("{} Employees", Icons::PEOPLE));
                if employees.is_empty() {
                    ui::not_found("No employees found.");
                } else {
                    println!("{}", ui::employee_table(&employees));
                }
            }
        }

        Commands::Call { tool, args } => {
            let arguments: Value = serde_json::from_str(&args)?;
            let response = dispatcher.call(&tool, Some(arguments))?;
            // Scripts calling tools directly always get the structured form
            render(&response, true)?;
        }

        Commands::Tools => {
            println!("{}", serde_json::to_string_pretty(&tools::catalog())?);
        }

        Commands::Stats => {
            if cli.in_memory {
                anyhow::bail!("stats are only available for a database file");
            }
            let stats = db.connect()?.stats()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                ui::header(&format!("Empstore Statistics ({})", db.path().display()));
                println!("{}", stats);
            }
        }

        Commands::Mcp => {
            if cli.in_memory {
                tracing::info!("Using in-memory store");
            } else {
                tracing::info!("Using database {}", db.path().display());
            }
            let service = empstore::server::McpService::new(dispatcher);
            tokio::runtime::Runtime::new()?.block_on(service.run_stdio())?;
        }

        Commands::Serve { port } => {
            ui::header(&format!("{} Serving employee tools on port {}", Icons::WRENCH, port));
            tokio::runtime::Runtime::new()?
                .block_on(empstore::server::start_server(port, dispatcher))?;
        }
    }

    Ok(())
}

/// Print a tool response. Invalid arguments exit with status 2.
fn render(response: &ToolResponse, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    match response.status {
        ToolStatus::Ok => ui::success(&format!("{} {}", Icons::PERSON, response.message)),
        ToolStatus::NotFound => ui::not_found(&response.message),
        ToolStatus::InvalidArguments => {
            ui::error(&response.message);
            std::process::exit(2);
        }
    }
    Ok(())
}
