// core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the catalog engine.
///
/// Both kinds are recoverable: a caller re-prompts on `ValidationFailed` and
/// reports absence on `NotFound`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
  /// One message per violated field rule, in field order.
  #[error("Validation failed: {}", errors.join("; "))]
  ValidationFailed { errors: Vec<String> },

  #[error("Product not found: {id}")]
  NotFound { id: String },
}

impl CatalogError {
  pub fn not_found(id: impl Into<String>) -> Self {
    CatalogError::NotFound { id: id.into() }
  }

  /// Field-level messages of a validation failure; empty for other kinds.
  pub fn details(&self) -> &[String] {
    match self {
      CatalogError::ValidationFailed { errors } => errors,
      CatalogError::NotFound { .. } => &[],
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
