// core/src/store.rs

//! The in-memory product collection.

use crate::error::{CatalogError, CatalogResult};
use crate::product::{NewProduct, Product, ProductFragment, ProductId};
use std::collections::HashSet;
use std::fmt;
use tracing::{event, Level};
use uuid::Uuid;

/// Source of fresh product identifiers.
///
/// Implementations may repeat themselves. After [`ProductStore::MAX_ATTEMPTS`]
/// consecutive collisions the store asks the generator to widen its id space;
/// a generator that cannot widen is bypassed with a full-length UUID.
pub trait IdGenerator: Send + Sync {
  fn generate(&mut self) -> ProductId;

  /// Grows the id space. Returns `false` when it is already at its widest.
  fn widen(&mut self) -> bool {
    false
  }
}

/// Short lowercase-hex ids cut from a random v4 UUID.
#[derive(Debug, Clone, Copy)]
pub struct ShortIdGenerator {
  length: usize,
}

impl ShortIdGenerator {
  pub const DEFAULT_LENGTH: usize = 8;
  pub const MAX_LENGTH: usize = 32;

  /// `length` is clamped to `1..=32`.
  pub fn new(length: usize) -> Self {
    Self {
      length: length.clamp(1, Self::MAX_LENGTH),
    }
  }

  pub fn length(&self) -> usize {
    self.length
  }
}

impl Default for ShortIdGenerator {
  fn default() -> Self {
    Self::new(Self::DEFAULT_LENGTH)
  }
}

impl IdGenerator for ShortIdGenerator {
  fn generate(&mut self) -> ProductId {
    let mut raw = Uuid::new_v4().simple().to_string();
    raw.truncate(self.length);
    ProductId::new(raw)
  }

  fn widen(&mut self) -> bool {
    if self.length >= Self::MAX_LENGTH {
      return false;
    }
    self.length += 1;
    event!(Level::INFO, length = self.length, "Short id space exhausted, widening ids.");
    true
  }
}

/// Owns every product record, in insertion order.
///
/// Operations are plain synchronous calls; a multi-threaded host must put the
/// store behind its own lock.
pub struct ProductStore {
  products: Vec<Product>,
  issued: HashSet<ProductId>,
  generator: Box<dyn IdGenerator>,
}

impl ProductStore {
  /// Consecutive collisions tolerated before the id space is widened.
  pub const MAX_ATTEMPTS: usize = 16;

  pub fn new() -> Self {
    Self::with_generator(ShortIdGenerator::default())
  }

  pub fn with_generator(generator: impl IdGenerator + 'static) -> Self {
    Self {
      products: Vec::new(),
      issued: HashSet::new(),
      generator: Box::new(generator),
    }
  }

  /// Inserts each record of `products` as if created one by one.
  pub fn seeded(mut self, products: impl IntoIterator<Item = NewProduct>) -> Self {
    for product in products {
      self.create(product);
    }
    event!(Level::DEBUG, count = self.products.len(), "Store seeded.");
    self
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  /// Assigns a fresh id, stores the record and returns it.
  pub fn create(&mut self, new_product: NewProduct) -> &Product {
    let id = self.fresh_id();
    event!(Level::DEBUG, product_id = %id, name = %new_product.name, "Product created.");
    self.products.push(new_product.into_product(id));
    let last = self.products.len() - 1;
    &self.products[last]
  }

  /// All records in insertion order.
  pub fn get_all(&self) -> &[Product] {
    &self.products
  }

  pub fn get_by_id(&self, id: &str) -> CatalogResult<&Product> {
    self
      .products
      .iter()
      .find(|product| product.id.as_str() == id)
      .ok_or_else(|| CatalogError::not_found(id))
  }

  /// Merges the fields set in `fragment` into the record; other fields stay as they are.
  pub fn patch(&mut self, id: &str, fragment: ProductFragment) -> CatalogResult<&Product> {
    let product = self
      .products
      .iter_mut()
      .find(|product| product.id.as_str() == id)
      .ok_or_else(|| CatalogError::not_found(id))?;
    fragment.apply_to(product);
    event!(Level::DEBUG, product_id = %id, "Product patched.");
    Ok(product)
  }

  /// Removes the record and hands it back. Its id is never issued again.
  pub fn delete(&mut self, id: &str) -> CatalogResult<Product> {
    let index = self
      .products
      .iter()
      .position(|product| product.id.as_str() == id)
      .ok_or_else(|| CatalogError::not_found(id))?;
    let removed = self.products.remove(index);
    event!(Level::DEBUG, product_id = %id, remaining = self.products.len(), "Product deleted.");
    Ok(removed)
  }

  fn fresh_id(&mut self) -> ProductId {
    let mut collisions = 0;
    loop {
      let candidate = self.generator.generate();
      if self.issued.insert(candidate.clone()) {
        return candidate;
      }
      event!(Level::TRACE, product_id = %candidate, "Generated id already issued, retrying.");

      collisions += 1;
      if collisions < Self::MAX_ATTEMPTS {
        continue;
      }
      collisions = 0;
      if !self.generator.widen() {
        let fallback = ProductId::new(Uuid::new_v4().simple().to_string());
        if self.issued.insert(fallback.clone()) {
          event!(Level::WARN, product_id = %fallback, "Id generator exhausted, issued a full UUID.");
          return fallback;
        }
      }
    }
  }
}

impl Default for ProductStore {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for ProductStore {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ProductStore")
      .field("products", &self.products)
      .field("issued", &self.issued.len())
      .finish_non_exhaustive()
  }
}
