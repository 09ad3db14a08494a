mod cache;
mod cli;
mod constants;
mod errors;
mod logging;
mod providers;
mod roster_view;
mod service;
mod shapes;
mod validator;

#[cfg(test)]
mod tests;

use crate::{
    cache::MemberCache,
    cli::{execute, seed_if_empty, Cli},
    errors::AppError,
    logging::logger::{init_logger, log_error, log_info},
    providers::{
        db::{
            database, member_repository::SqliteMemberRepository,
            user_repository::SqliteUserRepository,
        },
        fs::roster_storage::FileSystemRosterStorage,
    },
    service::RosterService,
    shapes::settings::Settings,
    validator::MemberValidator,
};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        log_error(&err.to_string());
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let settings = Settings::load(cli.config.as_deref())?;
    settings.create_directories()?;
    init_logger(settings.log_path(), settings.log_level());
    log_info(&format!(
        "{} {} starting",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));

    let pool = database::open(&settings.database_url(), settings.database_init_tables).await?;
    let users = SqliteUserRepository::new(pool.clone());
    let repository = Arc::new(SqliteMemberRepository::new(pool));
    let storage = Arc::new(FileSystemRosterStorage::new());
    let service = RosterService::new(
        repository,
        MemberCache::new(settings.cache_size, settings.cache_expiration()),
        MemberValidator::new(),
        Arc::clone(&storage),
        storage,
    );

    seed_if_empty(&service, &settings).await;
    let output = execute(&service, &users, &settings, cli.command).await?;
    println!("{}", output);
    Ok(())
}
