// core/src/product.rs

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Opaque short identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
  pub fn new(raw: impl Into<String>) -> Self {
    ProductId(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl Borrow<str> for ProductId {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for ProductId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

/// A catalog record. Every instance held by a store satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub category: String,
  pub description: String,
  pub price: f64,
  pub stock: f64,
  /// Empty, an upload path, or an absolute http(s) URL.
  pub image: String,
}

/// A validated full payload, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub category: String,
  pub description: String,
  pub price: f64,
  pub stock: f64,
  pub image: String,
}

impl NewProduct {
  pub(crate) fn into_product(self, id: ProductId) -> Product {
    Product {
      id,
      name: self.name,
      category: self.category,
      description: self.description,
      price: self.price,
      stock: self.stock,
      image: self.image,
    }
  }
}

/// A validated subset of product fields. `None` means "leave untouched".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFragment {
  pub name: Option<String>,
  pub category: Option<String>,
  pub description: Option<String>,
  pub price: Option<f64>,
  pub stock: Option<f64>,
  pub image: Option<String>,
}

impl ProductFragment {
  /// Fragment carrying every field of `product`.
  pub fn from_product(product: &Product) -> Self {
    ProductFragment {
      name: Some(product.name.clone()),
      category: Some(product.category.clone()),
      description: Some(product.description.clone()),
      price: Some(product.price),
      stock: Some(product.stock),
      image: Some(product.image.clone()),
    }
  }

  /// Converts into a [`NewProduct`] when all mandatory fields are set.
  /// A missing image becomes empty.
  pub fn into_new_product(self) -> Option<NewProduct> {
    Some(NewProduct {
      name: self.name?,
      category: self.category?,
      description: self.description?,
      price: self.price?,
      stock: self.stock?,
      image: self.image.unwrap_or_default(),
    })
  }

  /// Writes every set field into `product`.
  pub(crate) fn apply_to(self, product: &mut Product) {
    if let Some(name) = self.name {
      product.name = name;
    }
    if let Some(category) = self.category {
      product.category = category;
    }
    if let Some(description) = self.description {
      product.description = description;
    }
    if let Some(price) = self.price {
      product.price = price;
    }
    if let Some(stock) = self.stock {
      product.stock = stock;
    }
    if let Some(image) = self.image {
      product.image = image;
    }
  }
}
