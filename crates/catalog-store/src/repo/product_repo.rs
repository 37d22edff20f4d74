//! SQLite repository for Products
//!
//! Implements create/read/update/delete/list plus the query-by-field
//! lookups over the `product` table. All calls are synchronous and
//! blocking; the connection is owned by the caller.

use crate::errors::{from_rusqlite, Result};
use catalog_core::{CatalogError, Category, Product};
use rusqlite::{Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

const COLUMNS: &str = "id, name, description, price, available, category";

/// SQLite repository for Products
pub struct ProductRepo;

impl ProductRepo {
    /// Persist a new Product and assign its id from the database
    ///
    /// Any id already on the value is discarded; create always inserts a
    /// fresh row.
    ///
    /// # Errors
    /// Returns a validation error when the fields fail `Product::validate`.
    pub fn create(conn: &Connection, product: &mut Product) -> Result<()> {
        product.validate()?;

        conn.execute(
            "INSERT INTO product (name, description, price, available, category)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                product.name,
                product.description,
                price_text(&product.price),
                if product.available { 1 } else { 0 },
                product.category.as_str(),
            ],
        )
        .map_err(from_rusqlite)?;

        product.id = Some(conn.last_insert_rowid());
        tracing::debug!(id = product.id, name = %product.name, "created product");

        Ok(())
    }

    /// Persist changes to an existing Product
    ///
    /// # Errors
    /// Returns a validation error when the Product has no id or its
    /// fields fail `Product::validate`.
    pub fn update(conn: &Connection, product: &Product) -> Result<()> {
        let id = product
            .id
            .ok_or_else(|| CatalogError::validation("update called with empty id field"))?;
        product.validate()?;

        let changed = conn
            .execute(
                "UPDATE product
                 SET name = ?1, description = ?2, price = ?3, available = ?4, category = ?5
                 WHERE id = ?6",
                rusqlite::params![
                    product.name,
                    product.description,
                    price_text(&product.price),
                    if product.available { 1 } else { 0 },
                    product.category.as_str(),
                    id,
                ],
            )
            .map_err(from_rusqlite)?;

        tracing::debug!(id, rows = changed, "updated product");

        Ok(())
    }

    /// Remove a persisted Product
    ///
    /// # Errors
    /// Returns a validation error when the Product has no id.
    pub fn delete(conn: &Connection, product: &Product) -> Result<()> {
        let id = product
            .id
            .ok_or_else(|| CatalogError::validation("delete called with empty id field"))?;

        conn.execute("DELETE FROM product WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;

        tracing::debug!(id, "deleted product");

        Ok(())
    }

    /// List every persisted Product, ordered by id
    pub fn all(conn: &Connection) -> Result<Vec<Product>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM product ORDER BY id"))
            .map_err(from_rusqlite)?;

        let products = stmt
            .query_map([], row_to_product)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }

    /// Get a Product by id, or None when no row matches
    pub fn find(conn: &Connection, id: i64) -> Result<Option<Product>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM product WHERE id = ?1"),
            [id],
            row_to_product,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List Products with the given name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Vec<Product>> {
        Self::find_where(conn, "name = ?1", rusqlite::params![name])
    }

    /// List Products with the given availability
    pub fn find_by_availability(conn: &Connection, available: bool) -> Result<Vec<Product>> {
        Self::find_where(
            conn,
            "available = ?1",
            rusqlite::params![if available { 1 } else { 0 }],
        )
    }

    /// List Products in the given category
    pub fn find_by_category(conn: &Connection, category: Category) -> Result<Vec<Product>> {
        Self::find_where(conn, "category = ?1", rusqlite::params![category.as_str()])
    }

    /// List Products with exactly the given price
    ///
    /// The match is on the normalized decimal form, so 12.50 and 12.5
    /// are the same price.
    pub fn find_by_price(conn: &Connection, price: Decimal) -> Result<Vec<Product>> {
        Self::find_where(conn, "price = ?1", rusqlite::params![price_text(&price)])
    }

    fn find_where(
        conn: &Connection,
        predicate: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Product>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {COLUMNS} FROM product WHERE {predicate} ORDER BY id"
            ))
            .map_err(from_rusqlite)?;

        let products = stmt
            .query_map(params, row_to_product)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }
}

/// Canonical column form of a price; trailing zeros are stripped so
/// equality queries are insensitive to how the caller wrote the value
fn price_text(price: &Decimal) -> String {
    price.normalize().to_string()
}

fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
    let price_column: String = row.get(3)?;
    let price = Decimal::from_str(&price_column).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let available: i64 = row.get(4)?;
    let category: String = row.get(5)?;

    Ok(Product {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        description: row.get(2)?,
        price,
        available: available != 0,
        category: Category::from_name(&category),
    })
}
