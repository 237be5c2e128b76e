// server/src/web/routes.rs

use actix_web::{guard, http::header, web, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::web::handlers::{product_handlers, upload_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn not_found_handler() -> HttpResponse {
  HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}

fn is_multipart(ctx: &guard::GuardContext<'_>) -> bool {
  ctx
    .head()
    .headers()
    .get(header::CONTENT_TYPE)
    .and_then(|value| value.to_str().ok())
    .map(|value| value.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
    .unwrap_or(false)
}

// Called from `main.rs` (and the tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig, upload_prefix: &str) {
  cfg
    // Malformed or non-JSON bodies surface as our own 400 error body.
    .app_data(web::JsonConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()))
    .route("/api/health", web::get().to(health_check_handler))
    .service(
      web::scope("/api/products")
        .service(
          web::resource("")
            .route(web::get().to(product_handlers::list_products_handler))
            .route(
              web::post()
                .guard(guard::fn_guard(is_multipart))
                .to(product_handlers::create_product_multipart_handler),
            )
            .route(web::post().to(product_handlers::create_product_handler)),
        )
        .service(
          web::resource("/{product_id}")
            .route(web::get().to(product_handlers::get_product_handler))
            .route(web::patch().to(product_handlers::patch_product_handler))
            .route(web::delete().to(product_handlers::delete_product_handler)),
        ),
    )
    // Uploaded images are served under the same prefix the validator accepts.
    .route(
      &format!("{}{{file_name}}", upload_prefix),
      web::get().to(upload_handlers::serve_upload_handler),
    )
    .default_service(web::to(not_found_handler));
}
