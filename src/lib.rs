/*!
 * # camlex - Cameroon Languages Dictionary Database
 *
 * A Rust library for building a French-to-Cameroonian-languages dictionary
 * as a SQLite database.
 *
 * ## Features
 *
 * - Idempotent schema creation for the three dictionary tables with
 *   foreign-key enforcement and lookup indexes
 * - Bulk loading of the embedded seed data (6 languages, 24 categories,
 *   and the full curated translation set)
 * - Demonstration read queries (greetings join, per-language word counts)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `database`: SQLite persistence layer:
 *   - `database::schema`: Table and index definitions
 *   - `database::connection`: Connection management
 *   - `database::models`: Typed rows and enumerations
 *   - `database::repository`: Seed loading and queries
 * - `seed`: The embedded dictionary data
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod database;
pub mod errors;
pub mod seed;

// Re-export main types for easier usage
pub use database::{DatabaseConnection, DatabaseStats, Repository, SeedSummary};
pub use errors::AppError;
