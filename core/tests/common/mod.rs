// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog::{IdGenerator, NewProduct, ProductId, ProductPayload, ProductStore};
use serde_json::Value;
use tracing::Level;

// --- Common Payload Builders ---

/// A payload that passes full validation.
pub fn valid_payload() -> ProductPayload {
  ProductPayload::default()
    .with("name", "Pad")
    .with("category", "Коврики")
    .with("description", "Толстый коврик")
    .with("price", 100)
    .with("stock", 5)
}

pub fn payload_from(value: Value) -> ProductPayload {
  serde_json::from_value(value).expect("test payload must deserialize")
}

pub fn sample_product(name: &str) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    category: "Мыши".to_string(),
    description: "Лёгкая мышь с сотами".to_string(),
    price: 4990.0,
    stock: 15.0,
    image: String::new(),
  }
}

// --- Deterministic Ids ---

/// Hands out "p1", "p2", ... so tests can predict ids.
#[derive(Debug, Default)]
pub struct SequentialIds {
  next: usize,
}

impl IdGenerator for SequentialIds {
  fn generate(&mut self) -> ProductId {
    self.next += 1;
    ProductId::new(format!("p{}", self.next))
  }
}

pub fn sequential_store() -> ProductStore {
  ProductStore::with_generator(SequentialIds::default())
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
