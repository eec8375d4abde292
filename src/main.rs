mod rides;
mod shared;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use log::info;
use rides::repository::ride_repository::{RideRepository, RideRepositoryImpl};
use rides::{create_ride, get_ride, get_rides, unreadable_ride};
use shared::config::Config;
use shared::database::Database;

// This struct represents state
pub struct AppState<RR: RideRepository> {
  pub ride_repository: RR,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
    .init();

  let app_config = Config::default();
  let database = Database::connect(&app_config)
    .await
    .map_err(std::io::Error::other)?;
  let database = Arc::new(database);

  info!("Listening on http://{}", app_config.server_address);

  HttpServer::new(move || {
    App::new().wrap(Logger::default()).configure(|cfg| {
      let ride_repository = RideRepositoryImpl::new(database.clone());
      config(cfg, ride_repository)
    })
  })
  .bind(&app_config.server_address)?
  .run()
  .await
}

// Function to initialize the App
fn config<RR: RideRepository + 'static>(
  config: &mut web::ServiceConfig,
  ride_repository: RR,
) {
  config
    .app_data(web::Data::new(AppState { ride_repository }))
    .app_data(web::JsonConfig::default().error_handler(unreadable_ride))
    .route("/health", web::get().to(health))
    .service(
      web::scope("/rides")
        .route("/{id}", web::get().to(get_ride::<RR>))
        .route("", web::get().to(get_rides::<RR>))
        .route("", web::post().to(create_ride::<RR>)),
    );
}

async fn health() -> impl Responder {
  HttpResponse::Ok().content_type("text/plain").body("Healthy")
}
