use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator_derive::Validate;

/// Ride submission as received. Fields of the wrong JSON type deserialize to
/// `None`, so they fail validation like missing ones.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRideDto {
  #[serde(default, deserialize_with = "lenient_number")]
  #[validate(required, range(min = -90.0, max = 90.0))]
  pub start_lat: Option<f64>,
  #[serde(default, deserialize_with = "lenient_number")]
  #[validate(required, range(min = -180.0, max = 180.0))]
  pub start_long: Option<f64>,
  #[serde(default, deserialize_with = "lenient_number")]
  #[validate(required, range(min = -90.0, max = 90.0))]
  pub end_lat: Option<f64>,
  #[serde(default, deserialize_with = "lenient_number")]
  #[validate(required, range(min = -180.0, max = 180.0))]
  pub end_long: Option<f64>,
  #[serde(default, deserialize_with = "lenient_text")]
  #[validate(required, length(min = 1))]
  pub rider_name: Option<String>,
  #[serde(default, deserialize_with = "lenient_text")]
  #[validate(required, length(min = 1))]
  pub driver_name: Option<String>,
  #[serde(default, deserialize_with = "lenient_text")]
  #[validate(required, length(min = 1))]
  pub driver_vehicle: Option<String>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::Number(number) => number.as_f64(),
    _ => None,
  })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::String(text) => Some(text),
    _ => None,
  })
}
