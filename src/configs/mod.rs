use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::api::error;

/// Opens the Postgres pool. A missing URL is a configuration error rather
/// than a panic so one-off tools can report it and exit cleanly.
pub async fn connect_database(database_url: Option<&str>) -> Result<PgPool, error::SystemError> {
    let database_url = database_url
        .ok_or_else(|| error::SystemError::config("DATABASE_URL must be set in .env file"))?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .min_connections(1)
        .acquire_slow_threshold(std::time::Duration::from_secs(3))
        .connect(database_url)
        .await?;
    Ok(pool)
}
