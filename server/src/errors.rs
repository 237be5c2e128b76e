// server/src/errors.rs

use actix_multipart::MultipartError;
use actix_web::{HttpResponse, ResponseError};
use catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Validation failures and unknown ids coming out of the catalog engine.
  #[error("Catalog Error: {0}")]
  Catalog(#[from] CatalogError),

  #[error("Nothing to update")]
  NothingToUpdate,

  #[error("Bad Request: {0}")]
  BadRequest(String),

  /// Rejected image upload (wrong type, too large, duplicated).
  #[error("Upload Error: {0}")]
  Upload(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Upload storage reports through anyhow; recover a catalog error if one is wrapped.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<CatalogError>() {
      Ok(catalog_err) => AppError::Catalog(catalog_err),
      Err(err) => match err.downcast::<std::io::Error>() {
        Ok(io_err) => AppError::Io(io_err),
        Err(err) => AppError::Internal(format!("{:#}", err)),
      },
    }
  }
}

impl From<MultipartError> for AppError {
  fn from(err: MultipartError) -> Self {
    AppError::BadRequest(format!("Malformed multipart body: {}", err))
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Catalog(CatalogError::ValidationFailed { errors }) => {
        tracing::warn!(details = ?errors, "Responding with validation error");
        HttpResponse::BadRequest().json(json!({"error": "Validation failed", "details": errors}))
      }
      AppError::Catalog(CatalogError::NotFound { id }) => {
        tracing::warn!(product_id = %id, "Responding with product not found");
        HttpResponse::NotFound().json(json!({"error": "Product not found"}))
      }
      AppError::NothingToUpdate => {
        tracing::warn!(application_error = %self, "Responding with error");
        HttpResponse::BadRequest().json(json!({"error": "Nothing to update"}))
      }
      AppError::BadRequest(m) | AppError::Upload(m) => {
        tracing::warn!(application_error = %self, "Responding with error");
        HttpResponse::BadRequest().json(json!({"error": m}))
      }
      AppError::NotFound(_) => HttpResponse::NotFound().json(json!({"error": "Not found"})),
      AppError::Config(_) | AppError::Io(_) | AppError::Internal(_) => {
        // Log the full error; the client only gets a generic message.
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "Internal server error"}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
