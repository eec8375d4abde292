use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GetRideRto {
  #[serde(rename = "rideID")]
  pub ride_id: i64,
  #[serde(rename = "startLat")]
  pub start_lat: f64,
  #[serde(rename = "startLong")]
  pub start_long: f64,
  #[serde(rename = "endLat")]
  pub end_lat: f64,
  #[serde(rename = "endLong")]
  pub end_long: f64,
  #[serde(rename = "riderName")]
  pub rider_name: String,
  #[serde(rename = "driverName")]
  pub driver_name: String,
  #[serde(rename = "driverVehicle")]
  pub driver_vehicle: String,
  pub created: DateTime<Utc>,
}
