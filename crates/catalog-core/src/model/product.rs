use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use std::str::FromStr;

use super::category::Category;
use crate::errors::{CatalogError, Result};

/// Mapping keys accepted by `deserialize`; anything else is rejected
const FIELDS: [&str; 6] = [
    "id",
    "name",
    "description",
    "price",
    "available",
    "category",
];

/// Product - a single catalog entry
///
/// A Product starts life in memory with no id. The persistence layer
/// assigns the id on create, after which it never changes. Prices are
/// carried as `Decimal` end to end so amounts like 298765.56 survive
/// storage and serialization without binary floating-point drift.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    /// Row id assigned by the database on create; `None` until then
    pub id: Option<i64>,

    /// Display name; must be non-empty to persist
    pub name: String,

    /// Free-text description, may be empty
    pub description: String,

    /// Unit price, non-negative
    pub price: Decimal,

    /// Whether the product is currently available
    pub available: bool,

    /// Classification from the closed category set
    pub category: Category,
}

impl Product {
    /// Create a new unpersisted Product
    pub fn new(
        name: String,
        description: String,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name,
            description,
            price,
            available,
            category,
        }
    }

    /// Check whether this Product has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Check the field invariants required for persistence
    ///
    /// # Errors
    /// Returns a validation error for an empty name or a negative price.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::validation("name must not be empty"));
        }
        if self.price < Decimal::ZERO {
            return Err(CatalogError::validation("price must not be negative"));
        }
        Ok(())
    }

    /// Produce a plain mapping of this Product's fields
    ///
    /// The price is rendered as a decimal string and the category as its
    /// canonical name, so the mapping round-trips through `deserialize`.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.as_str(),
        })
    }

    /// Populate fields from a plain mapping
    ///
    /// An `id` entry must be null or an integer and is otherwise ignored:
    /// ids come from the database. Unknown category names degrade to
    /// `Category::Unknown`; a category that is not a string at all is a
    /// type error.
    ///
    /// # Errors
    /// Returns a validation error when the payload is not a mapping, a
    /// required field is missing, a field has the wrong type, or an
    /// unrecognized key is present.
    pub fn deserialize(&mut self, data: &Value) -> Result<()> {
        let map = data
            .as_object()
            .ok_or_else(|| CatalogError::validation("payload is not a mapping"))?;

        if let Some(key) = map.keys().find(|k| !FIELDS.contains(&k.as_str())) {
            return Err(CatalogError::validation(format!(
                "unrecognized field [{key}]"
            )));
        }

        if let Some(id) = map.get("id") {
            if !id.is_null() && !id.is_i64() {
                return Err(CatalogError::validation(format!(
                    "invalid type for id: {id}"
                )));
            }
        }

        self.name = string_field(map, "name")?;
        self.description = string_field(map, "description")?;
        self.price = price_field(map)?;
        self.available = match required(map, "available")? {
            Value::Bool(flag) => *flag,
            other => {
                return Err(CatalogError::validation(format!(
                    "invalid type for boolean [available]: {other}"
                )))
            }
        };
        self.category = match required(map, "category")? {
            Value::String(name) => Category::from_name(name),
            other => {
                return Err(CatalogError::validation(format!(
                    "invalid type for category: {other}"
                )))
            }
        };

        Ok(())
    }
}

fn required<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    map.get(key)
        .ok_or_else(|| CatalogError::validation(format!("missing required field [{key}]")))
}

fn string_field(map: &Map<String, Value>, key: &str) -> Result<String> {
    match required(map, key)? {
        Value::String(text) => Ok(text.clone()),
        other => Err(CatalogError::validation(format!(
            "invalid type for string [{key}]: {other}"
        ))),
    }
}

/// Price accepts a decimal string or a JSON number; strings are the
/// decimal-exact path.
fn price_field(map: &Map<String, Value>) -> Result<Decimal> {
    match required(map, "price")? {
        Value::String(text) => Decimal::from_str(text.trim())
            .map_err(|e| CatalogError::validation(format!("invalid price value: {e}"))),
        Value::Number(number) => {
            if let Some(whole) = number.as_i64() {
                Ok(Decimal::from(whole))
            } else {
                number
                    .as_f64()
                    .and_then(Decimal::from_f64)
                    .ok_or_else(|| CatalogError::validation("price is out of range"))
            }
        }
        other => Err(CatalogError::validation(format!(
            "invalid type for price: {other}"
        ))),
    }
}
