// Mapping (de)serialization contract for Product
//
// Covers the validation rules: wrong field types, missing required fields,
// unrecognized keys, and the Unknown category fallback.

use catalog_core::{CatalogError, Category, Product};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

fn deserialize(data: serde_json::Value) -> Result<Product, CatalogError> {
    let mut product = Product::default();
    product.deserialize(&data)?;
    Ok(product)
}

#[test]
fn test_deserialize_known_example() {
    // Given: The Ranger mapping with a string price and a null id
    let product = deserialize(json!({
        "id": null,
        "name": "Ranger",
        "price": "298765.56",
        "description": "Truck for heavy work",
        "available": true,
        "category": "Truck"
    }))
    .unwrap();

    // Then: All fields populate and the price is decimal-exact
    assert_eq!(product.id, None);
    assert_eq!(product.name, "Ranger");
    assert_eq!(product.description, "Truck for heavy work");
    assert_eq!(product.price, Decimal::from_str("298765.56").unwrap());
    assert!(product.available);
    assert_eq!(product.category, Category::Truck);
}

#[test]
fn test_deserialize_rejects_non_boolean_available() {
    let result = deserialize(json!({
        "name": "Maverick",
        "description": "Truck to move in difficult roads",
        "price": 10000.99,
        "available": 1,
        "category": "Ban"
    }));
    assert!(matches!(
        result,
        Err(CatalogError::DataValidation { .. })
    ));
}

#[test]
fn test_deserialize_rejects_unrecognized_field() {
    let result = deserialize(json!({
        "name": "Maverick",
        "description": "Truck to move in difficult roads",
        "price": 10000.99,
        "available": true,
        "category": "Ban",
        "ids": false
    }));
    let err = result.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("ids"), "should name the bad key");
}

#[test]
fn test_deserialize_rejects_null_category() {
    let result = deserialize(json!({
        "name": "Maverick",
        "description": "Truck to move in difficult roads",
        "price": 10000.99,
        "available": true,
        "category": null
    }));
    assert!(matches!(
        result,
        Err(CatalogError::DataValidation { .. })
    ));
}

#[test]
fn test_deserialize_rejects_missing_required_field() {
    let result = deserialize(json!({
        "name": "Maverick",
        "description": "Truck to move in difficult roads",
        "available": true,
        "category": "Automotive"
    }));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("price"), "should name the field");
}

#[test]
fn test_deserialize_ignores_integer_id() {
    // An integer id passes the type check but never populates the field
    let product = deserialize(json!({
        "id": 7,
        "name": "Fedora",
        "description": "A red hat",
        "price": "12.50",
        "available": true,
        "category": "Cloths"
    }))
    .unwrap();
    assert_eq!(product.id, None, "ids only ever come from the database");
}

#[test]
fn test_deserialize_rejects_non_integer_id() {
    let result = deserialize(json!({
        "id": "seven",
        "name": "Fedora",
        "description": "A red hat",
        "price": "12.50",
        "available": true,
        "category": "Cloths"
    }));
    assert!(matches!(
        result,
        Err(CatalogError::DataValidation { .. })
    ));
}

#[test]
fn test_deserialize_rejects_non_mapping_payload() {
    assert!(deserialize(json!("not a mapping")).is_err());
    assert!(deserialize(json!(["name", "price"])).is_err());
}

#[test]
fn test_unknown_category_string_degrades_to_unknown() {
    // "Ban" names no member, so it falls back rather than failing
    let product = deserialize(json!({
        "name": "Maverick",
        "description": "Truck to move in difficult roads",
        "price": "10000.99",
        "available": true,
        "category": "Ban"
    }))
    .unwrap();
    assert_eq!(product.category, Category::Unknown);
}

#[test]
fn test_serialize_deserialize_round_trip() {
    let original = Product::new(
        "Fedora".to_string(),
        "A red hat".to_string(),
        Decimal::from_str("12.50").unwrap(),
        true,
        Category::Cloths,
    );
    let restored = deserialize(original.serialize()).unwrap();
    assert_eq!(restored, original);
}

proptest! {
    // The central numeric invariant: any non-negative price with up to four
    // decimal places survives the mapping round trip exactly.
    #[test]
    fn price_survives_mapping_round_trip(
        mantissa in 0i64..1_000_000_000_000,
        scale in 0u32..=4,
    ) {
        let price = Decimal::new(mantissa, scale);
        let original = Product::new(
            "Widget".to_string(),
            String::new(),
            price,
            false,
            Category::Housewares,
        );
        let restored = deserialize(original.serialize()).unwrap();
        prop_assert_eq!(restored.price, price);
    }
}
