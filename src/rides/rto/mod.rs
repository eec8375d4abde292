pub mod get_ride_rto;
