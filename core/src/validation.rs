// core/src/validation.rs

//! Field rules for product payloads and image reference resolution.
//!
//! The validator never stops at the first problem: every present (or, in
//! [`Mode::Full`], required) field is checked and each violation contributes
//! one message to [`CatalogError::ValidationFailed`].

use crate::error::{CatalogError, CatalogResult};
use crate::payload::{Field, ProductPayload};
use crate::product::{NewProduct, ProductFragment};
use regex::Regex;
use serde_json::Value;
use tracing::{event, instrument, Level};

pub const DEFAULT_UPLOAD_PREFIX: &str = "/uploads/";
/// Absolute http/https URL with a non-empty host and no whitespace.
pub const DEFAULT_URL_PATTERN: &str = r"(?i)^https?://[^\s/?#]+\S*$";

pub const NAME_RULE: &str = "name must not be empty";
pub const CATEGORY_RULE: &str = "category must not be empty";
pub const DESCRIPTION_RULE: &str = "description must be text of at least 5 characters";
pub const PRICE_RULE: &str = "price must be a number >= 0";
pub const STOCK_RULE: &str = "stock must be a number >= 0";

pub const MIN_DESCRIPTION_CHARS: usize = 5;

/// Whether every field is mandatory (create) or only supplied ones are checked (update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Full,
  Partial,
}

#[derive(Debug, Clone)]
pub struct ValidatorConfig {
  /// Path segment identifying locally stored image files.
  pub upload_prefix: String,
  /// Recognizes acceptable remote image URLs.
  pub url_pattern: Regex,
}

impl ValidatorConfig {
  pub fn new(upload_prefix: impl Into<String>) -> Self {
    Self {
      upload_prefix: upload_prefix.into(),
      ..Self::default()
    }
  }

  pub fn with_url_pattern(mut self, url_pattern: Regex) -> Self {
    self.url_pattern = url_pattern;
    self
  }
}

impl Default for ValidatorConfig {
  fn default() -> Self {
    Self {
      upload_prefix: DEFAULT_UPLOAD_PREFIX.to_string(),
      url_pattern: Regex::new(DEFAULT_URL_PATTERN).expect("default URL pattern compiles"),
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct PayloadValidator {
  config: ValidatorConfig,
}

impl PayloadValidator {
  pub fn new(config: ValidatorConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &ValidatorConfig {
    &self.config
  }

  pub fn image_rule(&self) -> String {
    format!(
      "image must be empty, name a file under '{}' or be an absolute http(s) URL",
      self.config.upload_prefix
    )
  }

  pub fn upload_rule(&self) -> String {
    format!("uploaded image path must name a file under '{}'", self.config.upload_prefix)
  }

  /// Validates `payload` without an uploaded file.
  ///
  /// In [`Mode::Full`] an absent `image` resolves to an empty string; in
  /// [`Mode::Partial`] absent fields stay `None` in the fragment.
  pub fn validate(&self, payload: &ProductPayload, mode: Mode) -> CatalogResult<ProductFragment> {
    self.validate_with_upload(payload, mode, None)
  }

  /// Validates `payload` together with the storage path of an uploaded image.
  ///
  /// The payload's `image` field is the remote URL channel. Both channels are
  /// checked independently; when both are valid the upload path wins.
  #[instrument(name = "PayloadValidator::validate", skip(self, payload), level = "trace")]
  pub fn validate_with_upload(
    &self,
    payload: &ProductPayload,
    mode: Mode,
    uploaded_path: Option<&str>,
  ) -> CatalogResult<ProductFragment> {
    let mut errors = Vec::new();

    let fragment = ProductFragment {
      name: check(&payload.name, mode, NAME_RULE, &mut errors, non_empty_text),
      category: check(&payload.category, mode, CATEGORY_RULE, &mut errors, non_empty_text),
      description: check(&payload.description, mode, DESCRIPTION_RULE, &mut errors, description_text),
      price: check(&payload.price, mode, PRICE_RULE, &mut errors, non_negative_number),
      stock: check(&payload.stock, mode, STOCK_RULE, &mut errors, non_negative_number),
      image: self.resolve_image(&payload.image, mode, uploaded_path, &mut errors),
    };

    if errors.is_empty() {
      event!(Level::TRACE, ?mode, "Payload accepted.");
      Ok(fragment)
    } else {
      event!(Level::DEBUG, ?mode, violations = errors.len(), "Payload rejected.");
      Err(CatalogError::ValidationFailed { errors })
    }
  }

  /// Full validation for the create path, producing an insertable record.
  pub fn validate_new(&self, payload: &ProductPayload, uploaded_path: Option<&str>) -> CatalogResult<NewProduct> {
    let fragment = self.validate_with_upload(payload, Mode::Full, uploaded_path)?;
    // Full mode sets every mandatory field once validation passed.
    fragment.into_new_product().ok_or_else(|| CatalogError::ValidationFailed {
      errors: vec!["incomplete product payload".to_string()],
    })
  }

  fn resolve_image(
    &self,
    field: &Field<Value>,
    mode: Mode,
    uploaded_path: Option<&str>,
    errors: &mut Vec<String>,
  ) -> Option<String> {
    let remote = field.as_present().and_then(|value| match self.image_reference(value) {
      Some(reference) => Some(reference),
      None => {
        errors.push(self.image_rule());
        None
      }
    });

    let uploaded = uploaded_path.and_then(|path| {
      let path = path.trim();
      if self.is_stored_file(path) {
        Some(path.to_string())
      } else {
        errors.push(self.upload_rule());
        None
      }
    });

    match (uploaded, remote) {
      (Some(path), _) => Some(path),
      (None, Some(reference)) => Some(reference),
      (None, None) if mode == Mode::Full => Some(String::new()),
      (None, None) => None,
    }
  }

  fn image_reference(&self, value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    let accepted =
      text.is_empty() || self.is_stored_file(text) || self.config.url_pattern.is_match(text);
    accepted.then(|| text.to_string())
  }

  /// `prefix` followed by a single plain file name.
  fn is_stored_file(&self, path: &str) -> bool {
    path.strip_prefix(self.config.upload_prefix.as_str()).is_some_and(|name| {
      !name.is_empty()
        && !name.starts_with('.')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    })
  }
}

/// Runs `rule` on a present field, records `message` on failure, and
/// treats an absent field as a failure in [`Mode::Full`].
fn check<T>(
  field: &Field<Value>,
  mode: Mode,
  message: &str,
  errors: &mut Vec<String>,
  rule: fn(&Value) -> Option<T>,
) -> Option<T> {
  let outcome = match field {
    Field::Present(value) => rule(value),
    Field::Absent if mode == Mode::Partial => return None,
    Field::Absent => None,
  };
  if outcome.is_none() {
    errors.push(message.to_string());
  }
  outcome
}

fn non_empty_text(value: &Value) -> Option<String> {
  let text = value.as_str()?.trim();
  (!text.is_empty()).then(|| text.to_string())
}

fn description_text(value: &Value) -> Option<String> {
  let text = value.as_str()?.trim();
  (text.chars().count() >= MIN_DESCRIPTION_CHARS).then(|| text.to_string())
}

fn non_negative_number(value: &Value) -> Option<f64> {
  let number = match value {
    Value::Number(number) => number.as_f64()?,
    Value::String(text) => {
      let text = text.trim();
      if text.is_empty() {
        return None;
      }
      text.parse::<f64>().ok()?
    }
    _ => return None,
  };
  if !number.is_finite() || number < 0.0 {
    return None;
  }
  // -0.0 passes the check above; store it as plain zero.
  Some(if number == 0.0 { 0.0 } else { number })
}
