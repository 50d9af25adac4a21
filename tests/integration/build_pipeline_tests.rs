/*!
 * Integration tests for the full database build pipeline
 */

use anyhow::Result;
use camlex::{DatabaseConnection, Repository, seed};

use crate::common;

/// Full build against a file-backed database: schema, seed, demo queries
#[test]
fn test_fullBuild_onFileDatabase_shouldSeedAndAnswerQueries() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let db_path = common::temp_db_path(&temp_dir);

    let repository = Repository::new(DatabaseConnection::new(&db_path)?);
    repository.seed_all()?;

    let stats = repository.connection().stats()?;
    assert_eq!(stats.language_count, 6);
    assert_eq!(stats.category_count, 24);
    assert_eq!(stats.translation_count, seed::TRANSLATIONS.len() as i64);
    assert!(stats.file_size_bytes > 0, "Database file should exist on disk");

    let greetings = repository.ewondo_greetings()?;
    assert!(!greetings.is_empty(), "Seed data missing: no Ewondo greetings");

    let counts = repository.word_counts_per_language()?;
    assert_eq!(counts.len(), 6);

    Ok(())
}

/// Re-opening an existing database re-runs schema initialization and must
/// neither fail nor change the schema object set
#[test]
fn test_reopen_onExistingDatabase_shouldKeepSchemaIdentical() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let db_path = common::temp_db_path(&temp_dir);

    let schema_sql = |db: &DatabaseConnection| -> Result<Vec<String>> {
        db.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT sql FROM sqlite_master WHERE sql IS NOT NULL ORDER BY name",
            )?;
            let rows = stmt
                .query_map([], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;
            Ok(rows)
        })
    };

    let first = {
        let db = DatabaseConnection::new(&db_path)?;
        schema_sql(&db)?
    };

    let db = DatabaseConnection::new(&db_path)?;
    let second = schema_sql(&db)?;

    assert_eq!(first, second);
    Ok(())
}

/// A second full run against the same file must leave the row counts unchanged
#[test]
fn test_secondRun_onSeededDatabase_shouldNotDuplicateData() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let db_path = common::temp_db_path(&temp_dir);

    {
        let repository = Repository::new(DatabaseConnection::new(&db_path)?);
        repository.seed_all()?;
    }

    // Fresh process equivalent: new connection over the same file
    let repository = Repository::new(DatabaseConnection::new(&db_path)?);
    let summary = repository.seed_all()?;

    assert_eq!(summary.languages_inserted, 0);
    assert_eq!(summary.categories_inserted, 0);
    assert_eq!(summary.translations_inserted, 0);

    let stats = repository.connection().stats()?;
    assert_eq!(stats.language_count, 6);
    assert_eq!(stats.category_count, 24);
    assert_eq!(stats.translation_count, seed::TRANSLATIONS.len() as i64);

    Ok(())
}

/// The seeded database satisfies the referential and check invariants
#[test]
fn test_seededDatabase_shouldSatisfyDataInvariants() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let db_path = common::temp_db_path(&temp_dir);

    let repository = Repository::new(DatabaseConnection::new(&db_path)?);
    repository.seed_all()?;

    repository.connection().execute(|conn| {
        let orphans: i64 = conn.query_row(
            r#"
            SELECT COUNT(*) FROM translations t
            WHERE (t.language_id IS NOT NULL
                   AND t.language_id NOT IN (SELECT language_id FROM languages))
               OR (t.category_id IS NOT NULL
                   AND t.category_id NOT IN (SELECT category_id FROM categories))
            "#,
            [],
            |row| row.get(0),
        )?;
        assert_eq!(orphans, 0, "Every FK reference should resolve");

        let bad_difficulty: i64 = conn.query_row(
            "SELECT COUNT(*) FROM translations
             WHERE difficulty_level IS NOT NULL
               AND difficulty_level NOT IN ('beginner', 'intermediate', 'advanced')",
            [],
            |row| row.get(0),
        )?;
        assert_eq!(bad_difficulty, 0);

        Ok(())
    })?;

    let merci = repository.lookup("Merci", "EWO")?;
    assert!(
        merci.iter().any(|r| r.translation == "Akiba"),
        "'Merci' in Ewondo should include 'Akiba'"
    );

    Ok(())
}
