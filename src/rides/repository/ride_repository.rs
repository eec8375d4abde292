use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::{sqlite::SqliteRow, Pool, Sqlite};
use thiserror::Error;

use crate::rides::model::Ride;
use crate::shared::database::Database;

#[derive(Debug, Error)]
pub enum RideRepositoryError {
  #[error("Database error: {0}")]
  DatabaseError(#[from] sqlx::Error),

  #[error("Ride {0} could not be read back after insert")]
  MissingAfterInsert(i64),
}

pub trait RideRepository {
  /// Stores a new ride and returns its generated id.
  async fn insert(&self, create_ride: CreateRide) -> Result<i64, RideRepositoryError>;
  async fn find_one(&self, ride_id: i64) -> Result<Option<Ride>, RideRepositoryError>;
  /// All rides in ascending id order.
  async fn find_all(&self) -> Result<Vec<Ride>, RideRepositoryError>;

  /// Inserts, then reads the row back so callers get the stored
  /// representation rather than their own input.
  async fn create(&self, create_ride: CreateRide) -> Result<Ride, RideRepositoryError> {
    let ride_id = self.insert(create_ride).await?;
    self
      .find_one(ride_id)
      .await?
      .ok_or(RideRepositoryError::MissingAfterInsert(ride_id))
  }
}

pub struct RideRepositoryImpl {
  pool: Arc<Pool<Sqlite>>,
}

impl RideRepositoryImpl {
  pub fn new(database: Arc<Database>) -> Self {
    Self {
      pool: database.pool.clone(),
    }
  }
}

impl RideRepository for RideRepositoryImpl {
  async fn insert(&self, create_ride: CreateRide) -> Result<i64, RideRepositoryError> {
    let query = r#"
      INSERT INTO rides (start_lat, start_long, end_lat, end_long, rider_name, driver_name, driver_vehicle, created_at)
      VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    "#;
    let result = sqlx::query(query)
      .bind(create_ride.start_lat)
      .bind(create_ride.start_long)
      .bind(create_ride.end_lat)
      .bind(create_ride.end_long)
      .bind(&create_ride.rider_name)
      .bind(&create_ride.driver_name)
      .bind(&create_ride.driver_vehicle)
      .bind(Utc::now())
      .execute(&*self.pool)
      .await?;
    Ok(result.last_insert_rowid())
  }

  async fn find_one(&self, ride_id: i64) -> Result<Option<Ride>, RideRepositoryError> {
    sqlx::query("SELECT * FROM rides WHERE ride_id = ? LIMIT 1")
      .bind(ride_id)
      .try_map(|row: SqliteRow| Ride::try_from(row))
      .fetch_optional(&*self.pool)
      .await
      .map_err(RideRepositoryError::from)
  }

  async fn find_all(&self) -> Result<Vec<Ride>, RideRepositoryError> {
    sqlx::query("SELECT * FROM rides ORDER BY ride_id ASC")
      .try_map(|row: SqliteRow| Ride::try_from(row))
      .fetch_all(&*self.pool)
      .await
      .map_err(RideRepositoryError::from)
  }
}

/// A validated submission, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRide {
  pub start_lat: f64,
  pub start_long: f64,
  pub end_lat: f64,
  pub end_long: f64,
  pub rider_name: String,
  pub driver_name: String,
  pub driver_vehicle: String,
}

impl TryFrom<SqliteRow> for Ride {
  type Error = sqlx::Error;

  fn try_from(row: SqliteRow) -> Result<Self, Self::Error> {
    Ok(Self {
      ride_id: row.try_get("ride_id")?,
      start_lat: row.try_get("start_lat")?,
      start_long: row.try_get("start_long")?,
      end_lat: row.try_get("end_lat")?,
      end_long: row.try_get("end_long")?,
      rider_name: row.try_get("rider_name")?,
      driver_name: row.try_get("driver_name")?,
      driver_vehicle: row.try_get("driver_vehicle")?,
      created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
  }
}
