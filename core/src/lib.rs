// src/lib.rs

//! Catalog: the validation and mutation engine behind a small product catalog.
//!
//! The crate is transport-agnostic. A host (an HTTP server, a CLI, a test)
//! hands raw payloads to a [`PayloadValidator`] and feeds the normalized
//! result into a [`ProductStore`]:
//!  - Full payloads (create) must carry every field; partial payloads (update)
//!    are checked only on the fields they carry.
//!  - All violations are reported at once, never just the first.
//!  - An image reference is resolved from an uploaded-file path or a remote
//!    URL, the upload winning when both are given.
//!  - The store owns its records, hands out short ids and keeps insertion order.

pub mod error;
pub mod payload;
pub mod product;
pub mod seed;
pub mod store;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult};
pub use crate::payload::{Field, ProductPayload};
pub use crate::product::{NewProduct, Product, ProductFragment, ProductId};
pub use crate::store::{IdGenerator, ProductStore, ShortIdGenerator};
pub use crate::validation::{Mode, PayloadValidator, ValidatorConfig};

/*
    Typical flow:
    1. Build one `PayloadValidator` (optionally from a custom `ValidatorConfig`)
       and one `ProductStore` at startup.
    2. Create: `validator.validate_new(&payload, uploaded_path)?` then
       `store.create(new_product)`.
    3. Update: reject payloads where `!payload.has_updates()`, then
       `validator.validate(&payload, Mode::Partial)?` and `store.patch(id, fragment)?`.
    4. Map `CatalogError::ValidationFailed` / `CatalogError::NotFound` to the
       host's own error surface.
*/
