// core/src/payload.rs

//! Raw, untyped input as it arrives from a transport.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A payload field that is either missing or carries a value.
///
/// A missing key stays `Absent`, while an explicit JSON `null` is
/// `Present(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Field<T> {
  #[default]
  Absent,
  Present(T),
}

impl<T> Field<T> {
  pub fn is_present(&self) -> bool {
    matches!(self, Field::Present(_))
  }

  pub fn as_present(&self) -> Option<&T> {
    match self {
      Field::Present(value) => Some(value),
      Field::Absent => None,
    }
  }
}

impl<T> From<Option<T>> for Field<T> {
  fn from(value: Option<T>) -> Self {
    value.map_or(Field::Absent, Field::Present)
  }
}

/// Product fields as supplied by a caller, before any validation.
///
/// Only a JSON object deserializes into a payload; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPayload {
  pub name: Field<Value>,
  pub category: Field<Value>,
  pub description: Field<Value>,
  pub price: Field<Value>,
  pub stock: Field<Value>,
  /// Remote image URL (or an already stored upload path, or empty).
  pub image: Field<Value>,
}

impl ProductPayload {
  /// Sets a recognized field by name. Returns `false` for unknown names.
  pub fn set(&mut self, field: &str, value: Value) -> bool {
    let slot = match field {
      "name" => &mut self.name,
      "category" => &mut self.category,
      "description" => &mut self.description,
      "price" => &mut self.price,
      "stock" => &mut self.stock,
      "image" => &mut self.image,
      _ => return false,
    };
    *slot = Field::Present(value);
    true
  }

  /// Builder-style variant of [`ProductPayload::set`]; unknown names are dropped.
  pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
    self.set(field, value.into());
    self
  }

  /// Whether at least one recognized field is present.
  pub fn has_updates(&self) -> bool {
    [
      &self.name,
      &self.category,
      &self.description,
      &self.price,
      &self.stock,
      &self.image,
    ]
    .iter()
    .any(|field| field.is_present())
  }
}

impl<'de> Deserialize<'de> for ProductPayload {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    // Map rejects sequences, so fields are never bound by position.
    let object = Map::<String, Value>::deserialize(deserializer)?;
    let mut payload = ProductPayload::default();
    for (key, value) in object {
      payload.set(&key, value);
    }
    Ok(payload)
  }
}
