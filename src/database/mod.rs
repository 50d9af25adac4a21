/*!
 * Database module for the dictionary store.
 *
 * This module provides SQLite-based persistence for:
 * - The three dictionary tables (languages, categories, translations)
 * - Bulk loading of the embedded seed data
 * - The demonstration read queries
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::{DatabaseConnection, DatabaseStats};
pub use repository::{Repository, SeedSummary};
