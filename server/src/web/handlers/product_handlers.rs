// server/src/web/handlers/product_handlers.rs

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use catalog::{Mode, Product, ProductPayload};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::upload_form::read_product_form;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products: Vec<Product> = app_state.store.read().get_all().to_vec();
  info!("Listing {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = app_state.store.read().get_by_id(&product_id)?.clone();
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let new_product = app_state.validator.validate_new(&payload, None)?;
  let product = app_state.store.write().create(new_product).clone();
  info!(product_id = %product.id, "Product created.");
  Ok(HttpResponse::Created().json(product))
}

/// Create from a multipart form, optionally carrying an image file.
///
/// The file is stored before validation so its path can take part in image
/// resolution; it is removed again when the form is rejected.
#[instrument(name = "handler::create_product_multipart", skip(app_state, multipart))]
pub async fn create_product_multipart_handler(
  app_state: web::Data<AppState>,
  multipart: Multipart,
) -> Result<HttpResponse, AppError> {
  let form = read_product_form(multipart, app_state.config.max_upload_bytes).await?;

  let uploaded_path = match form.image_file {
    Some(upload) => Some(app_state.uploads.store(upload).await?),
    None => None,
  };

  let new_product = match app_state.validator.validate_new(&form.payload, uploaded_path.as_deref()) {
    Ok(new_product) => new_product,
    Err(e) => {
      if let Some(path) = &uploaded_path {
        if let Err(remove_err) = app_state.uploads.remove(path).await {
          warn!(upload = %path, error = %remove_err, "Failed to discard upload of rejected product.");
        }
      }
      return Err(e.into());
    }
  };

  let product = app_state.store.write().create(new_product).clone();
  info!(product_id = %product.id, image = %product.image, "Product created from form.");
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::patch_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn patch_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  // Unknown ids answer 404 before the body is looked at.
  app_state.store.read().get_by_id(&product_id)?;

  if !payload.has_updates() {
    warn!("Patch request carries no recognized field.");
    return Err(AppError::NothingToUpdate);
  }

  let fragment = app_state.validator.validate(&payload, Mode::Partial)?;
  let product = app_state.store.write().patch(&product_id, fragment)?.clone();
  info!("Product updated.");
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  app_state.store.write().delete(&product_id)?;
  info!("Product deleted.");
  Ok(HttpResponse::NoContent().finish())
}
