//! Migration framework
//!
//! Provides:
//! - Embedded SQL migrations
//! - Idempotent application with a schema_version ledger
//! - SHA256 checksums to detect drift in applied migrations

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
