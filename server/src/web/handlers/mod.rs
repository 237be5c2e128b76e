// server/src/web/handlers/mod.rs

// Declare handler modules
pub mod product_handlers;
pub mod upload_form;
pub mod upload_handlers;
