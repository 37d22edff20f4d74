//! Embedded SQL migrations
//!
//! Migration SQL is embedded at compile time with include_str!

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All embedded migrations, in application order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_create_product",
        sql: include_str!("../../migrations/001_create_product.sql"),
    }]
}
