use std::{str::FromStr, sync::Arc, time::Duration};

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::shared::config::Config;

const RIDES_SCHEMA: &str = r#"
  CREATE TABLE IF NOT EXISTS rides (
    ride_id INTEGER PRIMARY KEY AUTOINCREMENT,
    start_lat REAL NOT NULL,
    start_long REAL NOT NULL,
    end_lat REAL NOT NULL,
    end_long REAL NOT NULL,
    rider_name TEXT NOT NULL,
    driver_name TEXT NOT NULL,
    driver_vehicle TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
  )
"#;

pub struct Database {
  pub pool: Arc<Pool<Sqlite>>,
}

impl Database {
  pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
    let pool = prepare_pool(config).await?;
    build_schemas(&pool).await?;
    Ok(Self { pool: Arc::new(pool) })
  }
}

pub async fn prepare_pool(config: &Config) -> Result<Pool<Sqlite>, sqlx::Error> {
  let options =
    SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
  info!("Connecting to {}", config.database_url);
  // Idle connections must never be reaped, an in-memory database would go
  // with them.
  SqlitePoolOptions::new()
    .max_connections(config.database_max_connections)
    .idle_timeout(None::<Duration>)
    .max_lifetime(None::<Duration>)
    .connect_with(options)
    .await
}

pub async fn build_schemas(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
  sqlx::query(RIDES_SCHEMA).execute(pool).await?;
  Ok(())
}
