use thiserror::Error;
use validator::{Validate, ValidationErrors};

use super::dto::create_ride_dto::CreateRideDto;
use super::repository::ride_repository::CreateRide;

/// A rejected ride submission. The `Display` text is the message sent to the
/// client. Name, driver and vehicle failures share one message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RideValidationError {
  #[error("Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively")]
  StartCoordinates,
  #[error("End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively")]
  EndCoordinates,
  #[error("Rider name must be a non empty string")]
  RiderName,
  #[error("Rider name must be a non empty string")]
  DriverName,
  #[error("Rider name must be a non empty string")]
  DriverVehicle,
}

/// Checks in reporting order. Only the first failing entry is reported.
const PRECEDENCE: [(&[&str], RideValidationError); 5] = [
  (
    &["start_lat", "start_long"],
    RideValidationError::StartCoordinates,
  ),
  (&["end_lat", "end_long"], RideValidationError::EndCoordinates),
  (&["rider_name"], RideValidationError::RiderName),
  (&["driver_name"], RideValidationError::DriverName),
  (&["driver_vehicle"], RideValidationError::DriverVehicle),
];

pub fn validate_ride(dto: &CreateRideDto) -> Result<(), RideValidationError> {
  let Err(errors) = dto.validate() else {
    return Ok(());
  };
  // Every field carrying a rule is listed in `PRECEDENCE`.
  match first_failure(&errors) {
    Some(validation_error) => Err(validation_error),
    None => Ok(()),
  }
}

fn first_failure(errors: &ValidationErrors) -> Option<RideValidationError> {
  let failed = errors.errors();
  PRECEDENCE
    .iter()
    .find(|(fields, _)| fields.iter().any(|field| failed.contains_key(*field)))
    .map(|(_, validation_error)| *validation_error)
}

impl TryFrom<CreateRideDto> for CreateRide {
  type Error = RideValidationError;

  fn try_from(dto: CreateRideDto) -> Result<Self, Self::Error> {
    validate_ride(&dto)?;
    let (start_lat, start_long) = dto
      .start_lat
      .zip(dto.start_long)
      .ok_or(RideValidationError::StartCoordinates)?;
    let (end_lat, end_long) = dto
      .end_lat
      .zip(dto.end_long)
      .ok_or(RideValidationError::EndCoordinates)?;
    Ok(Self {
      start_lat,
      start_long,
      end_lat,
      end_long,
      rider_name: dto.rider_name.ok_or(RideValidationError::RiderName)?,
      driver_name: dto.driver_name.ok_or(RideValidationError::DriverName)?,
      driver_vehicle: dto
        .driver_vehicle
        .ok_or(RideValidationError::DriverVehicle)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::{json, Value};

  fn valid_body() -> Value {
    json!({
      "start_lat": 0,
      "start_long": 0,
      "end_lat": 0,
      "end_long": 0,
      "rider_name": "Rider Name",
      "driver_name": "Driver Name",
      "driver_vehicle": "Driver Vehicle"
    })
  }

  fn with(field: &str, value: Value) -> CreateRideDto {
    let mut body = valid_body();
    body[field] = value;
    serde_json::from_value(body).unwrap()
  }

  fn without(field: &str) -> CreateRideDto {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove(field);
    serde_json::from_value(body).unwrap()
  }

  #[test]
  fn test_valid_submission() {
    let dto: CreateRideDto = serde_json::from_value(valid_body()).unwrap();
    assert_eq!(validate_ride(&dto), Ok(()));
  }

  #[test]
  fn test_boundaries_are_inclusive() {
    let dto: CreateRideDto = serde_json::from_value(json!({
      "start_lat": -90,
      "start_long": 180,
      "end_lat": 90,
      "end_long": -180,
      "rider_name": "R",
      "driver_name": "D",
      "driver_vehicle": "V"
    }))
    .unwrap();
    assert_eq!(validate_ride(&dto), Ok(()));
  }

  #[test]
  fn test_start_coordinates_out_of_range() {
    for (field, value) in [
      ("start_lat", json!(-100)),
      ("start_lat", json!(90.0001)),
      ("start_long", json!(180.5)),
      ("start_long", json!(-181)),
    ] {
      assert_eq!(
        validate_ride(&with(field, value)),
        Err(RideValidationError::StartCoordinates)
      );
    }
  }

  #[test]
  fn test_start_coordinates_missing_or_not_numeric() {
    assert_eq!(
      validate_ride(&without("start_lat")),
      Err(RideValidationError::StartCoordinates)
    );
    assert_eq!(
      validate_ride(&with("start_long", json!("0"))),
      Err(RideValidationError::StartCoordinates)
    );
  }

  #[test]
  fn test_end_coordinates_out_of_range() {
    for (field, value) in [
      ("end_lat", json!(-100)),
      ("end_long", json!(200)),
      ("end_long", json!(null)),
    ] {
      assert_eq!(
        validate_ride(&with(field, value)),
        Err(RideValidationError::EndCoordinates)
      );
    }
    assert_eq!(
      validate_ride(&without("end_lat")),
      Err(RideValidationError::EndCoordinates)
    );
  }

  #[test]
  fn test_start_error_wins_over_every_other_error() {
    let dto: CreateRideDto = serde_json::from_value(json!({
      "start_lat": -100,
      "start_long": 0,
      "end_lat": 100,
      "end_long": 0,
      "rider_name": "",
      "driver_name": "",
      "driver_vehicle": ""
    }))
    .unwrap();
    assert_eq!(
      validate_ride(&dto),
      Err(RideValidationError::StartCoordinates)
    );
  }

  #[test]
  fn test_end_error_wins_over_name_errors() {
    let mut dto = with("end_long", json!(500));
    dto.rider_name = Some(String::new());
    assert_eq!(validate_ride(&dto), Err(RideValidationError::EndCoordinates));
  }

  #[test]
  fn test_empty_names_share_the_rider_name_message() {
    let cases = [
      ("rider_name", RideValidationError::RiderName),
      ("driver_name", RideValidationError::DriverName),
      ("driver_vehicle", RideValidationError::DriverVehicle),
    ];
    for (field, expected) in cases {
      let error = validate_ride(&with(field, json!(""))).unwrap_err();
      assert_eq!(error, expected);
      assert_eq!(error.to_string(), "Rider name must be a non empty string");
    }
  }

  #[test]
  fn test_names_must_be_strings() {
    assert_eq!(
      validate_ride(&with("rider_name", json!(7))),
      Err(RideValidationError::RiderName)
    );
    assert_eq!(
      validate_ride(&without("driver_vehicle")),
      Err(RideValidationError::DriverVehicle)
    );
  }

  #[test]
  fn test_rider_name_checked_before_driver_fields() {
    let mut dto = with("rider_name", json!(""));
    dto.driver_name = None;
    dto.driver_vehicle = None;
    assert_eq!(validate_ride(&dto), Err(RideValidationError::RiderName));
  }

  #[test]
  fn test_messages() {
    assert!(RideValidationError::StartCoordinates
      .to_string()
      .contains("Start latitude and longitude"));
    assert!(RideValidationError::EndCoordinates
      .to_string()
      .contains("End latitude and longitude"));
  }

  #[test]
  fn test_try_from_valid_dto() {
    let dto: CreateRideDto = serde_json::from_value(valid_body()).unwrap();
    let create_ride = CreateRide::try_from(dto).unwrap();
    assert_eq!(create_ride.start_lat, 0.0);
    assert_eq!(create_ride.rider_name, "Rider Name");
    assert_eq!(create_ride.driver_name, "Driver Name");
    assert_eq!(create_ride.driver_vehicle, "Driver Vehicle");
  }

  #[test]
  fn test_each_missing_field_reports_its_own_check() {
    let cases = [
      ("start_lat", RideValidationError::StartCoordinates),
      ("start_long", RideValidationError::StartCoordinates),
      ("end_lat", RideValidationError::EndCoordinates),
      ("end_long", RideValidationError::EndCoordinates),
      ("rider_name", RideValidationError::RiderName),
      ("driver_name", RideValidationError::DriverName),
      ("driver_vehicle", RideValidationError::DriverVehicle),
    ];
    for (field, expected) in cases {
      assert_eq!(validate_ride(&without(field)), Err(expected), "{field}");
      assert_eq!(CreateRide::try_from(without(field)), Err(expected), "{field}");
    }
  }

  #[test]
  fn test_try_from_invalid_dto() {
    let result = CreateRide::try_from(with("driver_name", json!("")));
    assert_eq!(result, Err(RideValidationError::DriverName));
  }
}
