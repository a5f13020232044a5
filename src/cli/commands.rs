use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::entity::EmployeeForm;

#[derive(Parser, Debug)]
#[command(name = "hrdesk")]
#[command(version, about = "Employee roster service with an AI assistant")]
#[command(propagate_version = true)]
pub struct Cli {
    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind (overrides HTTP_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides HTTP_PORT)
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },

    /// List all employees
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single employee
    Get {
        /// Employee ID
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new employee
    Add {
        #[command(flatten)]
        fields: EmployeeArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace every field of an existing employee
    Update {
        /// Employee ID
        id: i64,

        #[command(flatten)]
        fields: EmployeeArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an employee
    Delete {
        /// Employee ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Ask the assistant a question about the roster
    Ask {
        /// The question
        query: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct EmployeeArgs {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Job title
    #[arg(long)]
    pub role: String,

    /// Salary
    #[arg(long, allow_hyphen_values = true)]
    pub salary: String,

    /// Team name
    #[arg(long)]
    pub team: String,

    /// Hire date (start of employment)
    #[arg(long = "hire-date", value_name = "YYYY-MM-DD")]
    pub hire_date: String,
}

impl From<EmployeeArgs> for EmployeeForm {
    fn from(args: EmployeeArgs) -> Self {
        EmployeeForm {
            first_name: args.first_name,
            last_name: args.last_name,
            role: args.role,
            salary: args.salary,
            team: args.team,
            hire_date: args.hire_date,
        }
    }
}
