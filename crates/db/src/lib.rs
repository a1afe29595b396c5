//! Persistence layer: connection pool, migrations, models, repositories and
//! the startup catalog seed.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// When `database_name` is given it replaces the database named in the URL,
/// so one server URL can be shared between environments that only differ in
/// `DB_NAME`.
pub async fn create_pool(
    database_url: &str,
    database_name: Option<&str>,
) -> Result<DbPool, sqlx::Error> {
    let mut options: PgConnectOptions = database_url.parse()?;
    if let Some(name) = database_name {
        options = options.database(name);
    }

    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
