pub mod dto;
pub mod model;
pub mod repository;
pub mod rto;
pub mod validation;

use actix_web::{
  error::{InternalError, JsonPayloadError},
  web, HttpRequest, HttpResponse, Responder,
};
use dto::create_ride_dto::CreateRideDto;
use dto::get_ride_dto::GetRideDto;
use log::{error, info};
use model::Ride;
use repository::ride_repository::{CreateRide, RideRepository, RideRepositoryError};
use rto::get_ride_rto::GetRideRto;
use validation::RideValidationError;

use crate::{shared::http_error::HttpError, AppState};

pub async fn get_rides<RR: RideRepository + 'static>(
  data: web::Data<AppState<RR>>,
) -> impl Responder {
  rides_response(data.ride_repository.find_all().await)
}

pub async fn get_ride<RR: RideRepository + 'static>(
  data: web::Data<AppState<RR>>,
  path: web::Path<GetRideDto>,
) -> impl Responder {
  // No row can match an id that is not an integer.
  let Some(ride_id) = path.ride_id() else {
    return rides_not_found();
  };
  let result = data.ride_repository.find_one(ride_id).await;
  rides_response(result.map(|ride| ride.into_iter().collect()))
}

pub async fn create_ride<RR: RideRepository + 'static>(
  data: web::Data<AppState<RR>>,
  dto: web::Json<CreateRideDto>,
) -> impl Responder {
  let create_ride = match CreateRide::try_from(dto.into_inner()) {
    Ok(create_ride) => create_ride,
    Err(validation_error) => return invalid_ride(validation_error),
  };
  let result = data.ride_repository.create(create_ride).await;
  rides_response(result.map(|ride| vec![ride]))
}

/// Json extractor error handler for ride submissions. A body that cannot be
/// read carries none of the fields, so it fails the first check.
pub fn unreadable_ride(
  payload_error: JsonPayloadError,
  _request: &HttpRequest,
) -> actix_web::Error {
  info!("Unreadable ride submission: {}", payload_error);
  let response = invalid_ride(RideValidationError::StartCoordinates);
  InternalError::from_response(payload_error, response).into()
}

/// Maps a storage outcome onto the response envelope. Failures win over an
/// empty result, and an empty result is reported as not found.
fn rides_response(result: Result<Vec<Ride>, RideRepositoryError>) -> HttpResponse {
  match result {
    Err(repository_error) => server_error(repository_error),
    Ok(rides) if rides.is_empty() => rides_not_found(),
    Ok(rides) => rides_found(rides),
  }
}

fn rides_found(rides: Vec<Ride>) -> HttpResponse {
  let rtos: Vec<GetRideRto> = rides.into_iter().map(GetRideRto::from).collect();
  HttpResponse::Ok()
    .content_type("application/json")
    .json(rtos)
}

fn rides_not_found() -> HttpResponse {
  HttpResponse::Ok()
    .content_type("application/json")
    .json(HttpError::rides_not_found())
}

fn invalid_ride(validation_error: RideValidationError) -> HttpResponse {
  info!("Rejected ride submission: {:?}", validation_error);
  HttpResponse::Ok()
    .content_type("application/json")
    .json(HttpError::validation(validation_error.to_string()))
}

fn server_error(repository_error: RideRepositoryError) -> HttpResponse {
  error!("{}", repository_error);
  HttpResponse::Ok()
    .content_type("application/json")
    .json(HttpError::server_error())
}

// Transform Ride domain to RTO
impl From<Ride> for GetRideRto {
  fn from(ride: Ride) -> Self {
    Self {
      ride_id: ride.ride_id,
      start_lat: ride.start_lat,
      start_long: ride.start_long,
      end_lat: ride.end_lat,
      end_long: ride.end_long,
      rider_name: ride.rider_name,
      driver_name: ride.driver_name,
      driver_vehicle: ride.driver_vehicle,
      created: ride.created_at,
    }
  }
}
