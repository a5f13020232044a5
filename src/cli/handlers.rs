use std::io;
use std::path::Path;

use crate::chat::ChatClient;
use crate::config::Config;
use crate::entity::{Employee, EmployeeForm};
use crate::error::{HrError, Result};
use crate::storage::{Database, EmployeeStore};

use super::commands::EmployeeArgs;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hrdesk=info,tower_http=info".into()),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn open_store(db_path: &Path) -> Result<EmployeeStore> {
    Database::open(db_path)?.session()
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

fn print_employee_line(e: &Employee) {
    println!(
        "  {:>3}  {} | {} | {} | {} | hired {}",
        e.id,
        e.full_name(),
        e.role,
        e.team,
        e.salary,
        e.hire_date
    );
}

fn print_employee_detail(e: &Employee) {
    println!("Employee {} - {}", e.id, e.full_name());
    println!("Role: {}", e.role);
    println!("Team: {}", e.team);
    println!("Salary: {}", e.salary);
    println!("Hired: {}", e.hire_date);
}

pub fn handle_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    init_tracing();

    if let Some(host) = host {
        config.http_host = host;
    }
    if let Some(port) = port {
        config.http_port = port;
    }

    runtime()?.block_on(crate::http::serve(config))
}

pub fn handle_list(db_path: &Path, json: bool) -> Result<()> {
    let store = open_store(db_path)?;
    let employees = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&employees)?);
    } else if employees.is_empty() {
        println!("No employees found.");
    } else {
        println!("Employees:\n");
        for e in &employees {
            print_employee_line(e);
        }
    }

    Ok(())
}

pub fn handle_get(db_path: &Path, id: i64, json: bool) -> Result<()> {
    let store = open_store(db_path)?;
    let employee = store.get(id)?.ok_or(HrError::NotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&employee)?);
    } else {
        print_employee_detail(&employee);
    }

    Ok(())
}

pub fn handle_add(db_path: &Path, fields: EmployeeArgs, json: bool) -> Result<()> {
    let store = open_store(db_path)?;
    let form: EmployeeForm = fields.into();

    if store
        .find_by_name(&form.first_name, &form.last_name)?
        .is_some()
    {
        return Err(HrError::Duplicate {
            first_name: form.first_name,
            last_name: form.last_name,
        });
    }

    let input = form.parse()?;
    let employee = store.create(&input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&employee)?);
    } else {
        println!("Created employee {} - {}", employee.id, employee.full_name());
    }

    Ok(())
}

pub fn handle_update(db_path: &Path, id: i64, fields: EmployeeArgs, json: bool) -> Result<()> {
    let store = open_store(db_path)?;
    let input = EmployeeForm::from(fields).parse()?;
    let employee = store.update(id, &input)?.ok_or(HrError::NotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&employee)?);
    } else {
        println!("Updated employee {} - {}", employee.id, employee.full_name());
    }

    Ok(())
}

pub fn handle_delete(db_path: &Path, id: i64, force: bool) -> Result<()> {
    let store = open_store(db_path)?;
    let employee = store.get(id)?.ok_or(HrError::NotFound(id))?;

    // Confirm deletion unless --force is used
    if !force {
        eprintln!("Delete employee {} - {}? [y/N] ", employee.id, employee.full_name());

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(HrError::Validation(vec![
                "Use --force to delete in non-interactive mode".to_string(),
            ]));
        }
    }

    match store.delete(id)? {
        Some(removed) => {
            println!("Deleted employee {} - {}", removed.id, removed.full_name());
            Ok(())
        }
        // Removed by someone else between the lookup and the delete
        None => Err(HrError::NotFound(id)),
    }
}

pub fn handle_ask(config: &Config, query: String) -> Result<()> {
    let client = ChatClient::from_config(&config.chat)?.ok_or(HrError::MissingApiKey)?;
    if query.trim().is_empty() {
        return Err(HrError::Validation(vec!["query is empty".to_string()]));
    }

    init_tracing();

    let roster = open_store(&config.database_path)?.list()?;
    let answer = runtime()?.block_on(client.ask(&roster, &query))?;
    println!("{}", answer);

    Ok(())
}
