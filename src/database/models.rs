/*!
 * Database entity models.
 *
 * These structures map directly to the dictionary tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::AppError;

/// Difficulty level of a dictionary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Everyday vocabulary, first words a learner meets
    Beginner,
    /// Phrases and less common vocabulary
    Intermediate,
    /// Idiomatic or specialized entries
    Advanced,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Beginner => write!(f, "beginner"),
            DifficultyLevel::Intermediate => write!(f, "intermediate"),
            DifficultyLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for DifficultyLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(DifficultyLevel::Beginner),
            "intermediate" => Ok(DifficultyLevel::Intermediate),
            "advanced" => Ok(DifficultyLevel::Advanced),
            _ => Err(AppError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Language reference row (immutable reference data, six fixed rows)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    /// Short fixed code, e.g. "EWO"
    pub language_id: String,
    /// Display name, e.g. "Ewondo"
    pub language_name: String,
    /// Language-family label
    pub language_family: Option<String>,
    /// Region label
    pub region: Option<String>,
    /// Approximate speaker count
    pub speakers_count: Option<i64>,
    /// Free-text description
    pub description: Option<String>,
    /// ISO-639-style code
    pub iso_code: Option<String>,
}

/// Category reference row (immutable reference data, twenty-four fixed rows)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Short fixed code, e.g. "GRT"
    pub category_id: String,
    /// Display name, e.g. "Greetings"
    pub category_name: String,
    /// Free-text description
    pub description: Option<String>,
}

/// Dictionary translation row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Database ID (assigned by AUTOINCREMENT)
    pub translation_id: i64,
    /// French headword or phrase
    pub french_text: String,
    /// Reference to the target language
    pub language_id: Option<String>,
    /// Translated text
    pub translation: String,
    /// Reference to the vocabulary category
    pub category_id: Option<String>,
    /// Pronunciation guide
    pub pronunciation: Option<String>,
    /// Usage notes
    pub usage_notes: Option<String>,
    /// Difficulty level
    pub difficulty_level: Option<DifficultyLevel>,
    /// Creation timestamp, set by the database on insert
    pub created_date: String,
}

/// A (source text, translation, pronunciation) triple from the greetings demo query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingEntry {
    /// French source text
    pub french_text: String,
    /// Translated text
    pub translation: String,
    /// Pronunciation guide
    pub pronunciation: Option<String>,
}

/// Per-language translation count from the aggregate demo query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageWordCount {
    /// Language display name
    pub language_name: String,
    /// Number of translation rows referencing the language
    pub word_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficultyLevel_display_shouldReturnLowercase() {
        assert_eq!(DifficultyLevel::Beginner.to_string(), "beginner");
        assert_eq!(DifficultyLevel::Intermediate.to_string(), "intermediate");
        assert_eq!(DifficultyLevel::Advanced.to_string(), "advanced");
    }

    #[test]
    fn test_difficultyLevel_fromStr_shouldParseValidStrings() {
        assert_eq!(
            "beginner".parse::<DifficultyLevel>().unwrap(),
            DifficultyLevel::Beginner
        );
        assert_eq!(
            "Intermediate".parse::<DifficultyLevel>().unwrap(),
            DifficultyLevel::Intermediate
        );
        assert_eq!(
            "ADVANCED".parse::<DifficultyLevel>().unwrap(),
            DifficultyLevel::Advanced
        );
    }

    #[test]
    fn test_difficultyLevel_fromStr_withUnknownValue_shouldFail() {
        let result = "expert".parse::<DifficultyLevel>();
        assert!(matches!(result, Err(AppError::InvalidDifficulty(_))));
    }

    #[test]
    fn test_difficultyLevel_displayThenParse_shouldRoundTrip() {
        for level in [
            DifficultyLevel::Beginner,
            DifficultyLevel::Intermediate,
            DifficultyLevel::Advanced,
        ] {
            assert_eq!(level.to_string().parse::<DifficultyLevel>().unwrap(), level);
        }
    }
}
