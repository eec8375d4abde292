pub mod ride_repository;
