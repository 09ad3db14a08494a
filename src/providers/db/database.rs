use crate::{errors::AppError, logging::logger::log_info};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

const TABLES_SQL: &str = include_str!("../../../resources/tables.sql");

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Opens the pool for `url`, creating the database file when missing.
///
/// An in-memory database lives inside a single connection, so the pool is
/// pinned to one connection that is never recycled.
pub async fn connect(url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool_options = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(4)
    };
    let pool = pool_options.connect_with(options).await?;
    log_info(&format!("connected to database '{}'", url));
    Ok(pool)
}

pub async fn init_tables(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(TABLES_SQL).execute(pool).await?;
    log_info("database tables ready");
    Ok(())
}

/// Connects and, when `init_tables` is set, runs the schema script.
pub async fn open(url: &str, init_tables: bool) -> Result<SqlitePool, AppError> {
    let pool = connect(url).await?;
    if init_tables {
        self::init_tables(&pool).await?;
    }
    Ok(pool)
}
