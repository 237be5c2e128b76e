// server/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod logging;
mod services;
mod state;
mod web;

use crate::config::AppConfig;
use crate::services::image_storage::LocalImageStorage;
use crate::state::{AppState, SharedStore};

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use catalog::{PayloadValidator, ProductStore, ShortIdGenerator, ValidatorConfig};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // LOG_FORMAT may come from .env, so load it before the subscriber.
  dotenvy::dotenv().ok();
  logging::init_tracing(logging::LogFormat::from_env());

  tracing::info!("Starting catalog server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  // One store for the whole process, handed to every worker through AppState.
  let mut store = ProductStore::with_generator(ShortIdGenerator::new(app_config.id_length));
  if app_config.seed_catalog {
    store = store.seeded(catalog::seed::demo_products());
    tracing::info!("Catalog seeded with {} demo products.", store.len());
  }

  let app_state = AppState {
    store: SharedStore::new(store),
    validator: Arc::new(PayloadValidator::new(ValidatorConfig::new(app_config.upload_prefix.clone()))),
    uploads: Arc::new(LocalImageStorage::new(
      app_config.upload_dir.clone(),
      app_config.upload_prefix.clone(),
    )),
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);
  tracing::info!("API: http://{}/api/products", server_address);

  HttpServer::new(move || {
    let upload_prefix = app_state.config.upload_prefix.clone();
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(|cfg| web::configure_app_routes(cfg, &upload_prefix))
  })
  .bind(&server_address)?
  .run()
  .await
}
