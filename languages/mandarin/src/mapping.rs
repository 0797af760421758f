use std::collections::HashMap;

use kamus_core::{Language, lookup_key};
use serde::Deserialize;

use crate::loader::{self, LoadError};

/// One curated translation, word or sentence level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPair {
    pub source_language: Language,
    pub target_language: Language,
    pub source_text: String,
    pub target_text: String,
}

type Direction = (Language, Language);

/// Curated word and sentence pairs used before any live translation.
///
/// Word pairs are keyed case-insensitively; sentence pairs must match
/// exactly since punctuation and casing carry meaning there.
pub struct TranslationTable {
    words: HashMap<Direction, HashMap<String, String>>,
    sentences: HashMap<Direction, HashMap<String, String>>,
}

#[derive(Deserialize)]
struct RawTables {
    #[serde(default)]
    words: Vec<RawGroup>,
    #[serde(default)]
    sentences: Vec<RawGroup>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGroup {
    source: String,
    target: String,
    #[serde(default)]
    derive_reverse: bool,
    pairs: Vec<(String, String)>,
}

impl RawGroup {
    fn direction(&self) -> Result<Direction, LoadError> {
        let language = |code: &str| {
            Language::from_code(code).ok_or_else(|| LoadError::InvalidEntry {
                table: "translations",
                message: format!("unknown language code '{}'", code),
            })
        };
        Ok((language(self.source.as_str())?, language(self.target.as_str())?))
    }
}

impl TranslationTable {
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
            sentences: HashMap::new(),
        }
    }

    /// Create with the embedded Malay/Mandarin pairs
    pub fn with_defaults() -> Self {
        Self::from_json(loader::TRANSLATIONS_JSON).unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded translation table: {}", e);
            tracing::warn!("Starting with empty translation table");
            Self::new()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawTables =
            serde_json::from_str(json).map_err(LoadError::format("translations"))?;

        let mut table = Self::new();

        for group in raw.words {
            let (from, to) = group.direction()?;

            if group.derive_reverse {
                let reverse = group
                    .pairs
                    .iter()
                    .map(|(source, target)| (lookup_key(target), source.clone()));
                extend(&mut table.words, (to, from), "reverse word pairs", reverse);
            }

            let forward = group
                .pairs
                .into_iter()
                .map(|(source, target)| (lookup_key(&source), target));
            extend(&mut table.words, (from, to), "word pairs", forward);
        }

        for group in raw.sentences {
            let direction = group.direction()?;
            extend(
                &mut table.sentences,
                direction,
                "sentence pairs",
                group.pairs.into_iter(),
            );
        }

        tracing::debug!(
            "Translation table: {} word pairs, {} sentence pairs",
            table.words.values().map(HashMap::len).sum::<usize>(),
            table.sentences.values().map(HashMap::len).sum::<usize>()
        );

        Ok(table)
    }

    /// Add a single pair, replacing any existing pair for the same key
    pub fn insert(&mut self, pair: TranslationPair, sentence: bool) {
        let direction = (pair.source_language, pair.target_language);
        let (map, key) = if sentence {
            (&mut self.sentences, pair.source_text)
        } else {
            (&mut self.words, lookup_key(&pair.source_text))
        };
        map.entry(direction).or_default().insert(key, pair.target_text);
    }

    /// Exact sentence match for the given direction
    pub fn lookup_sentence(&self, text: &str, from: Language, to: Language) -> Option<&str> {
        self.sentences
            .get(&(from, to))
            .and_then(|pairs| pairs.get(text))
            .map(String::as_str)
    }

    /// Case-insensitive word match for the given direction
    pub fn lookup_word(&self, text: &str, from: Language, to: Language) -> Option<&str> {
        self.words
            .get(&(from, to))
            .and_then(|pairs| pairs.get(&lookup_key(text)))
            .map(String::as_str)
    }

    /// Sentence pair first, then word pair
    pub fn lookup(&self, text: &str, from: Language, to: Language) -> Option<&str> {
        self.lookup_sentence(text, from, to)
            .or_else(|| self.lookup_word(text, from, to))
    }

    pub fn word_count(&self) -> usize {
        self.words.values().map(HashMap::len).sum()
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn extend(
    maps: &mut HashMap<Direction, HashMap<String, String>>,
    direction: Direction,
    table: &str,
    pairs: impl Iterator<Item = (String, String)>,
) {
    let target = maps.entry(direction).or_default();
    let existing = std::mem::take(target);
    *target = loader::last_write_wins(table, existing.into_iter().chain(pairs));
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: &str = r#"{
        "words": [
            {
                "source": "ms",
                "target": "zh",
                "deriveReverse": true,
                "pairs": [["cantik", "美丽"], ["gembira", "开心"], ["senang", "开心"]]
            }
        ],
        "sentences": [
            { "source": "ms", "target": "zh", "pairs": [["Kamu sangat bijak", "你很聪明"]] }
        ]
    }"#;

    #[test]
    fn word_lookup_ignores_case() {
        let table = TranslationTable::from_json(TABLES).unwrap();

        assert_eq!(
            table.lookup_word("CANTIK", Language::Malay, Language::Mandarin),
            Some("美丽")
        );
    }

    #[test]
    fn reverse_pairs_are_derived_last_write_wins() {
        let table = TranslationTable::from_json(TABLES).unwrap();

        assert_eq!(
            table.lookup_word("美丽", Language::Mandarin, Language::Malay),
            Some("cantik")
        );
        assert_eq!(
            table.lookup_word("开心", Language::Mandarin, Language::Malay),
            Some("senang")
        );
    }

    #[test]
    fn sentence_lookup_is_exact() {
        let table = TranslationTable::from_json(TABLES).unwrap();

        assert_eq!(
            table.lookup("Kamu sangat bijak", Language::Malay, Language::Mandarin),
            Some("你很聪明")
        );
        assert_eq!(
            table.lookup_sentence("kamu sangat bijak", Language::Malay, Language::Mandarin),
            None
        );
    }

    #[test]
    fn direction_matters() {
        let table = TranslationTable::from_json(TABLES).unwrap();

        assert_eq!(
            table.lookup("Kamu sangat bijak", Language::Mandarin, Language::Malay),
            None
        );
    }

    #[test]
    fn unknown_language_code_is_rejected() {
        let result = TranslationTable::from_json(
            r#"{"words": [{"source": "en", "target": "zh", "pairs": []}]}"#,
        );

        assert!(matches!(result, Err(LoadError::InvalidEntry { .. })));
    }

    #[test]
    fn insert_replaces_pair() {
        let mut table = TranslationTable::from_json(TABLES).unwrap();
        table.insert(
            TranslationPair {
                source_language: Language::Malay,
                target_language: Language::Mandarin,
                source_text: "Gembira".to_string(),
                target_text: "快乐".to_string(),
            },
            false,
        );

        assert_eq!(
            table.lookup_word("gembira", Language::Malay, Language::Mandarin),
            Some("快乐")
        );
    }

    #[test]
    fn embedded_table_loads() {
        let table = TranslationTable::with_defaults();

        assert_eq!(
            table.lookup_word("takut", Language::Malay, Language::Mandarin),
            Some("害怕")
        );
        assert!(table.word_count() > 0);
    }
}
