pub mod create_ride_dto;
pub mod get_ride_dto;
