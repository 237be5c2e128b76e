// server/src/web/handlers/upload_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::services::image_storage::content_type_for;
use crate::state::AppState;

#[instrument(name = "handler::serve_upload", skip(app_state, path), fields(file_name = %path.as_ref()))]
pub async fn serve_upload_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let file_name = path.into_inner();
  match app_state.uploads.load(&file_name).await? {
    Some(bytes) => Ok(HttpResponse::Ok().content_type(content_type_for(&file_name)).body(bytes)),
    None => Err(AppError::NotFound(format!("upload '{}'", file_name))),
  }
}
