// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use catalog::ShortIdGenerator;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const MIN_ID_LENGTH: usize = 4;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Directory uploaded images are written to.
  pub upload_dir: PathBuf,
  /// URL path prefix uploaded images are served under; also the prefix the
  /// validator accepts for local image references.
  pub upload_prefix: String,
  pub max_upload_bytes: usize,

  /// Populate the store with the demo catalog on startup.
  pub seed_catalog: bool,
  pub id_length: usize,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "3000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let upload_dir = PathBuf::from(get_env("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()));
    let upload_prefix = get_env("UPLOAD_PREFIX").unwrap_or_else(|_| catalog::validation::DEFAULT_UPLOAD_PREFIX.to_string());
    if upload_prefix.len() < 2 || !upload_prefix.starts_with('/') || !upload_prefix.ends_with('/') {
      return Err(AppError::Config(format!(
        "Invalid UPLOAD_PREFIX '{}': must start and end with '/'",
        upload_prefix
      )));
    }
    let max_upload_bytes = get_env("MAX_UPLOAD_BYTES")
      .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
      .parse::<usize>()
      .map_err(|e| AppError::Config(format!("Invalid MAX_UPLOAD_BYTES: {}", e)))?;

    let seed_catalog = get_env("SEED_CATALOG")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_CATALOG value: {}", e)))?;

    let id_length = get_env("ID_LENGTH")
      .unwrap_or_else(|_| ShortIdGenerator::DEFAULT_LENGTH.to_string())
      .parse::<usize>()
      .map_err(|e| AppError::Config(format!("Invalid ID_LENGTH: {}", e)))?;
    if !(MIN_ID_LENGTH..=ShortIdGenerator::MAX_LENGTH).contains(&id_length) {
      return Err(AppError::Config(format!(
        "Invalid ID_LENGTH {}: expected {}..={}",
        id_length,
        MIN_ID_LENGTH,
        ShortIdGenerator::MAX_LENGTH
      )));
    }

    tracing::info!("Application configuration loaded successfully.");
    tracing::debug!(
      server_host = %server_host,
      server_port,
      upload_dir = %upload_dir.display(),
      upload_prefix = %upload_prefix,
      max_upload_bytes,
      seed_catalog,
      id_length,
      "Loaded config details"
    );

    Ok(Self {
      server_host,
      server_port,
      upload_dir,
      upload_prefix,
      max_upload_bytes,
      seed_catalog,
      id_length,
    })
  }
}
