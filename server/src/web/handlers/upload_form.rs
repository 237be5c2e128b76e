// server/src/web/handlers/upload_form.rs

//! Reads a multipart/form-data product form.

use actix_multipart::Multipart;
use catalog::ProductPayload;
use futures_util::TryStreamExt;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{AppError, Result as AppResult};
use crate::services::image_storage::ImageUpload;

/// Upper bound for a single text part.
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;
/// Form field names that may carry the image file.
const FILE_FIELDS: [&str; 2] = ["imageFile", "image"];

#[derive(Debug, Default)]
pub struct ProductForm {
  pub payload: ProductPayload,
  pub image_file: Option<ImageUpload>,
}

/// Splits the form into text fields (into a payload) and at most one image file.
///
/// A part with a file name is a file; an empty file part (no file chosen in the
/// browser) is skipped. Unknown text fields are ignored.
pub async fn read_product_form(mut multipart: Multipart, max_upload_bytes: usize) -> AppResult<ProductForm> {
  let mut form = ProductForm::default();

  while let Some(mut field) = multipart.try_next().await? {
    let field_name = field.name().unwrap_or_default().to_string();
    let file_name = field
      .content_disposition()
      .and_then(|cd| cd.get_filename())
      .map(str::to_string);
    let content_type = field.content_type().map(|mime| mime.essence_str().to_string());

    let limit = if file_name.is_some() { max_upload_bytes } else { MAX_TEXT_FIELD_BYTES };
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await? {
      if bytes.len() + chunk.len() > limit {
        warn!(field = %field_name, limit, "Multipart field exceeds size limit.");
        return Err(AppError::Upload(format!(
          "field '{}' exceeds the limit of {} bytes",
          field_name, limit
        )));
      }
      bytes.extend_from_slice(&chunk);
    }

    match file_name {
      Some(file_name) => {
        if !FILE_FIELDS.contains(&field_name.as_str()) {
          debug!(field = %field_name, "Ignoring file in unrecognized field.");
          continue;
        }
        if file_name.is_empty() && bytes.is_empty() {
          continue;
        }
        let content_type = content_type.unwrap_or_default();
        if !content_type.starts_with("image/") {
          return Err(AppError::Upload(format!(
            "uploaded file must be an image, got '{}'",
            content_type
          )));
        }
        if form.image_file.is_some() {
          return Err(AppError::Upload("only one image file per request".to_string()));
        }
        form.image_file = Some(ImageUpload {
          file_name: Some(file_name).filter(|name| !name.is_empty()),
          content_type,
          bytes,
        });
      }
      None => {
        let text = String::from_utf8(bytes)
          .map_err(|_| AppError::BadRequest(format!("field '{}' is not valid UTF-8", field_name)))?;
        if !form.payload.set(&field_name, Value::String(text)) {
          debug!(field = %field_name, "Ignoring unrecognized form field.");
        }
      }
    }
  }

  Ok(form)
}
