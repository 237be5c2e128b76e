// tests/validation_tests.rs
mod common;

use catalog::validation::{CATEGORY_RULE, DESCRIPTION_RULE, NAME_RULE, PRICE_RULE, STOCK_RULE};
use catalog::{CatalogError, Mode, NewProduct, PayloadValidator, ProductFragment, ValidatorConfig};
use common::*;
use serde_json::json;

fn errors_of(result: Result<ProductFragment, CatalogError>) -> Vec<String> {
  match result {
    Err(CatalogError::ValidationFailed { errors }) => errors,
    other => panic!("Expected ValidationFailed, got {:?}", other),
  }
}

#[test]
fn test_full_payload_is_trimmed_and_coerced() {
  setup_tracing();
  let validator = PayloadValidator::default();
  let payload = payload_from(json!({
    "name": "  Pad ",
    "category": "\tКоврики",
    "description": "  Толстый коврик  ",
    "price": "100.5",
    "stock": 5,
  }));

  let fragment = validator.validate(&payload, Mode::Full).unwrap();
  assert_eq!(
    fragment,
    ProductFragment {
      name: Some("Pad".into()),
      category: Some("Коврики".into()),
      description: Some("Толстый коврик".into()),
      price: Some(100.5),
      stock: Some(5.0),
      image: Some(String::new()),
    }
  );
}

#[test]
fn test_full_mode_reports_every_missing_field_in_order() {
  setup_tracing();
  let validator = PayloadValidator::default();
  let errors = errors_of(validator.validate(&payload_from(json!({})), Mode::Full));
  assert_eq!(
    errors,
    vec![NAME_RULE, CATEGORY_RULE, DESCRIPTION_RULE, PRICE_RULE, STOCK_RULE]
  );
}

#[test]
fn test_one_message_per_invalid_field() {
  setup_tracing();
  let validator = PayloadValidator::default();
  let payload = valid_payload().with("name", "   ").with("stock", -1);
  let errors = errors_of(validator.validate(&payload, Mode::Full));
  assert_eq!(errors, vec![NAME_RULE, STOCK_RULE]);
}

#[test]
fn test_wrong_types_are_rejected() {
  setup_tracing();
  let validator = PayloadValidator::default();
  let payload = payload_from(json!({
    "name": 42,
    "category": null,
    "description": ["long enough"],
    "price": true,
    "stock": "many",
  }));
  let errors = errors_of(validator.validate(&payload, Mode::Full));
  assert_eq!(errors.len(), 5);
}

#[test]
fn test_boundaries() {
  setup_tracing();
  let validator = PayloadValidator::default();

  let zeros = valid_payload().with("price", 0).with("stock", 0);
  let fragment = validator.validate(&zeros, Mode::Full).unwrap();
  assert_eq!(fragment.price, Some(0.0));
  assert_eq!(fragment.stock, Some(0.0));

  let negative_price = valid_payload().with("price", -0.01);
  assert_eq!(errors_of(validator.validate(&negative_price, Mode::Full)), vec![PRICE_RULE]);

  let negative_stock = valid_payload().with("stock", -1);
  assert_eq!(errors_of(validator.validate(&negative_stock, Mode::Full)), vec![STOCK_RULE]);

  let five = valid_payload().with("description", "  abcde  ");
  assert_eq!(
    validator.validate(&five, Mode::Full).unwrap().description.as_deref(),
    Some("abcde")
  );

  let four = valid_payload().with("description", " abcd ");
  assert_eq!(errors_of(validator.validate(&four, Mode::Full)), vec![DESCRIPTION_RULE]);
}

#[test]
fn test_partial_mode_checks_only_present_fields() {
  setup_tracing();
  let validator = PayloadValidator::default();

  let fragment = validator.validate(&payload_from(json!({ "stock": "3" })), Mode::Partial).unwrap();
  assert_eq!(
    fragment,
    ProductFragment {
      stock: Some(3.0),
      ..Default::default()
    }
  );

  let errors = errors_of(validator.validate(&payload_from(json!({ "name": "", "price": "x" })), Mode::Partial));
  assert_eq!(errors, vec![NAME_RULE, PRICE_RULE]);
}

#[test]
fn test_partial_mode_null_counts_as_present() {
  setup_tracing();
  let validator = PayloadValidator::default();
  let errors = errors_of(validator.validate(&payload_from(json!({ "price": null })), Mode::Partial));
  assert_eq!(errors, vec![PRICE_RULE]);
}

#[test]
fn test_image_field_forms() {
  setup_tracing();
  let validator = PayloadValidator::default();

  for accepted in ["", "   ", "/uploads/abc.png", "https://cdn.example.com/a.png", "http://example.com"] {
    let payload = payload_from(json!({ "image": accepted }));
    let fragment = validator.validate(&payload, Mode::Partial).unwrap();
    assert_eq!(fragment.image.as_deref(), Some(accepted.trim()));
  }

  for rejected in [
    "ftp://example.com/a.png",
    "uploads/a.png",
    "not a url",
    "https://",
    "/uploads/",
    "/uploads/../x",
    "/uploads/sub/a.png",
    "/uploads/.hidden",
  ] {
    let payload = payload_from(json!({ "image": rejected }));
    let errors = errors_of(validator.validate(&payload, Mode::Partial));
    assert_eq!(errors, vec![validator.image_rule()], "{rejected} should be rejected");
  }

  let errors = errors_of(validator.validate(&payload_from(json!({ "image": null })), Mode::Partial));
  assert_eq!(errors, vec![validator.image_rule()]);
}

#[test]
fn test_upload_takes_precedence_over_url() {
  setup_tracing();
  let validator = PayloadValidator::default();
  let payload = valid_payload().with("image", "https://example.com/remote.png");

  let product = validator.validate_new(&payload, Some("/uploads/local.png")).unwrap();
  assert_eq!(product.image, "/uploads/local.png");

  let product = validator.validate_new(&payload, None).unwrap();
  assert_eq!(product.image, "https://example.com/remote.png");

  let product = validator.validate_new(&valid_payload(), None).unwrap();
  assert_eq!(product.image, "");
}

#[test]
fn test_malformed_url_fails_even_with_upload() {
  setup_tracing();
  let validator = PayloadValidator::default();
  let payload = valid_payload().with("image", "ftp://example.com/remote.png");

  let result = validator.validate_new(&payload, Some("/uploads/local.png"));
  assert_eq!(
    result,
    Err(CatalogError::ValidationFailed {
      errors: vec![validator.image_rule()]
    })
  );
}

#[test]
fn test_upload_outside_prefix_is_rejected() {
  setup_tracing();
  let validator = PayloadValidator::default();
  let result = validator.validate_new(&valid_payload(), Some("/tmp/evil.png"));
  assert_eq!(
    result,
    Err(CatalogError::ValidationFailed {
      errors: vec![validator.upload_rule()]
    })
  );
}

#[test]
fn test_upload_path_must_name_a_file() {
  setup_tracing();
  let validator = PayloadValidator::default();
  for path in ["/uploads/", "/uploads/../secret", "/uploads/a/b.png"] {
    let result = validator.validate_new(&valid_payload(), Some(path));
    assert_eq!(
      result,
      Err(CatalogError::ValidationFailed {
        errors: vec![validator.upload_rule()]
      }),
      "{path} should be rejected"
    );
  }
}

#[test]
fn test_custom_prefix_and_pattern() {
  setup_tracing();
  let config = ValidatorConfig::new("/media/").with_url_pattern(regex::Regex::new(r"^https://cdn\.example\.com/").unwrap());
  let validator = PayloadValidator::new(config);

  assert!(validator.validate(&payload_from(json!({ "image": "/media/a.png" })), Mode::Partial).is_ok());
  assert!(validator.validate(&payload_from(json!({ "image": "/uploads/a.png" })), Mode::Partial).is_err());
  assert!(validator
    .validate(&payload_from(json!({ "image": "https://cdn.example.com/a.png" })), Mode::Partial)
    .is_ok());
  assert!(validator
    .validate(&payload_from(json!({ "image": "https://other.example.com/a.png" })), Mode::Partial)
    .is_err());
  assert!(validator.image_rule().contains("'/media/'"));
}

#[test]
fn test_validate_new_builds_record() {
  setup_tracing();
  let validator = PayloadValidator::default();
  let product = validator.validate_new(&valid_payload(), None).unwrap();
  assert_eq!(
    product,
    NewProduct {
      name: "Pad".into(),
      category: "Коврики".into(),
      description: "Толстый коврик".into(),
      price: 100.0,
      stock: 5.0,
      image: String::new(),
    }
  );
}
