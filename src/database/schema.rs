/*!
 * Database schema definitions.
 *
 * This module contains the SQL schema for the three dictionary tables
 * (languages, categories, translations) and their lookup indexes.
 */

use anyhow::Result;
use log::debug;
use rusqlite::Connection;

/// Initialize the database schema.
///
/// Safe to call against an already-initialized database: every statement
/// uses IF NOT EXISTS, so the table/index set never changes on re-run.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_languages_table(conn)?;
    create_categories_table(conn)?;
    create_translations_table(conn)?;

    debug!("Database schema initialized");
    Ok(())
}

/// Create the languages reference table
fn create_languages_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS languages (
            language_id VARCHAR(10) PRIMARY KEY,
            language_name VARCHAR(50) NOT NULL,
            language_family VARCHAR(100),
            region VARCHAR(50),
            speakers_count INTEGER,
            description TEXT,
            iso_code VARCHAR(10)
        );
        "#,
    )?;
    Ok(())
}

/// Create the categories reference table
fn create_categories_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            category_id VARCHAR(10) PRIMARY KEY,
            category_name VARCHAR(50) NOT NULL,
            description TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Create the translations table and its lookup indexes
fn create_translations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS translations (
            translation_id INTEGER PRIMARY KEY AUTOINCREMENT,
            french_text TEXT NOT NULL,
            language_id VARCHAR(10),
            translation TEXT NOT NULL,
            category_id VARCHAR(10),
            pronunciation TEXT,
            usage_notes TEXT,
            difficulty_level TEXT CHECK(difficulty_level IN ('beginner', 'intermediate', 'advanced')),
            created_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (language_id) REFERENCES languages(language_id),
            FOREIGN KEY (category_id) REFERENCES categories(category_id)
        );

        CREATE INDEX IF NOT EXISTS idx_translations_language ON translations(language_id);
        CREATE INDEX IF NOT EXISTS idx_translations_category ON translations(category_id);
        CREATE INDEX IF NOT EXISTS idx_translations_difficulty ON translations(difficulty_level);
        CREATE INDEX IF NOT EXISTS idx_translations_french ON translations(french_text);
        "#,
    )?;
    Ok(())
}

/// Drop all tables (for testing purposes only)
#[cfg(test)]
pub fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS translations;
        DROP TABLE IF EXISTS categories;
        DROP TABLE IF EXISTS languages;
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn create_test_connection() -> Connection {
        let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
        conn.execute_batch("PRAGMA foreign_keys=ON;").unwrap();
        conn
    }

    fn schema_objects(conn: &Connection) -> Vec<(String, String)> {
        conn.prepare(
            "SELECT type, name FROM sqlite_master
             WHERE name NOT LIKE 'sqlite_%' ORDER BY type, name",
        )
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .filter_map(|r| r.ok())
        .collect()
    }

    #[test]
    fn test_initializeSchema_withFreshDatabase_shouldCreateAllTables() {
        let conn = create_test_connection();

        initialize_schema(&conn).expect("Failed to initialize schema");

        let tables: Vec<String> = schema_objects(&conn)
            .into_iter()
            .filter(|(kind, _)| kind == "table")
            .map(|(_, name)| name)
            .collect();

        assert_eq!(tables, vec!["categories", "languages", "translations"]);
    }

    #[test]
    fn test_initializeSchema_withFreshDatabase_shouldCreateFourIndexes() {
        let conn = create_test_connection();

        initialize_schema(&conn).expect("Failed to initialize schema");

        let indexes: Vec<String> = schema_objects(&conn)
            .into_iter()
            .filter(|(kind, _)| kind == "index")
            .map(|(_, name)| name)
            .collect();

        assert_eq!(
            indexes,
            vec![
                "idx_translations_category",
                "idx_translations_difficulty",
                "idx_translations_french",
                "idx_translations_language",
            ]
        );
    }

    #[test]
    fn test_initializeSchema_calledTwice_shouldBeIdempotent() {
        let conn = create_test_connection();

        initialize_schema(&conn).expect("First initialization failed");
        let first = schema_objects(&conn);

        initialize_schema(&conn).expect("Second initialization failed");
        let second = schema_objects(&conn);

        assert_eq!(first, second);
    }

    #[test]
    fn test_foreignKeys_withUnknownLanguage_shouldRejectInsert() {
        let conn = create_test_connection();
        initialize_schema(&conn).expect("Failed to initialize schema");

        let result = conn.execute(
            "INSERT INTO translations (french_text, language_id, translation, category_id)
             VALUES ('Bonjour', 'XXX', 'Mbolo', NULL)",
            [],
        );

        assert!(result.is_err(), "Foreign key constraint should prevent insert");
    }

    #[test]
    fn test_difficultyCheck_withValueOutsideEnum_shouldRejectInsert() {
        let conn = create_test_connection();
        initialize_schema(&conn).expect("Failed to initialize schema");

        let result = conn.execute(
            "INSERT INTO translations (french_text, translation, difficulty_level)
             VALUES ('Bonjour', 'Mbolo', 'expert')",
            [],
        );

        assert!(result.is_err(), "CHECK constraint should reject unknown difficulty");
    }

    #[test]
    fn test_difficultyCheck_withNullDifficulty_shouldAcceptInsert() {
        let conn = create_test_connection();
        initialize_schema(&conn).expect("Failed to initialize schema");

        conn.execute(
            "INSERT INTO translations (french_text, translation, difficulty_level)
             VALUES ('Bonjour', 'Mbolo', NULL)",
            [],
        )
        .expect("NULL difficulty should be accepted");
    }

    #[test]
    fn test_dropAllTables_afterInitialize_shouldLeaveEmptySchema() {
        let conn = create_test_connection();
        initialize_schema(&conn).expect("Failed to initialize schema");

        drop_all_tables(&conn).expect("Failed to drop tables");

        let tables: Vec<(String, String)> = schema_objects(&conn)
            .into_iter()
            .filter(|(kind, _)| kind == "table")
            .collect();
        assert!(tables.is_empty());
    }
}
