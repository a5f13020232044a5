use std::path::PathBuf;

use clap::Parser;
use hrdesk::cli::{
    handle_add, handle_ask, handle_delete, handle_get, handle_list, handle_serve, handle_update,
    Cli, Commands,
};
use hrdesk::Config;

/// Full settings, needed only by commands that serve HTTP or call the chat provider
fn load_config(db: Option<PathBuf>) -> hrdesk::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(db) = db {
        config.database_path = db;
    }
    Ok(config)
}

fn database_path(db: Option<PathBuf>) -> PathBuf {
    db.unwrap_or_else(Config::database_path_from_env)
}

fn run(cli: Cli) -> hrdesk::Result<()> {
    let Cli { db, command } = cli;

    match command {
        Commands::Serve { host, port } => handle_serve(load_config(db)?, host, port),
        Commands::List { json } => handle_list(&database_path(db), json),
        Commands::Get { id, json } => handle_get(&database_path(db), id, json),
        Commands::Add { fields, json } => handle_add(&database_path(db), fields, json),
        Commands::Update { id, fields, json } => {
            handle_update(&database_path(db), id, fields, json)
        }
        Commands::Delete { id, force } => handle_delete(&database_path(db), id, force),
        Commands::Ask { query } => handle_ask(&load_config(db)?, query),
    }
}

fn main() {
    // A missing .env file is fine; real environment variables still apply
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
