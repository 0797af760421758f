use std::collections::HashMap;

use kamus_core::lookup_key;
use parking_lot::RwLock;

use crate::loader::{self, LoadError};

/// Token inserted for an unrecognised character after the first recognised one
pub const UNKNOWN_MARKER: &str = "[?]";

/// Returned for blank input
pub const NO_PINYIN: &str = "No pinyin available";

/// Word and character pinyin tables.
///
/// The character table is fixed after start-up. The word table accepts new
/// mappings at runtime through [`PinyinConverter::add_mapping`].
pub struct PinyinConverter {
    characters: HashMap<char, String>,
    words: RwLock<HashMap<String, String>>,
}

impl PinyinConverter {
    /// Create empty converter
    pub fn new() -> Self {
        Self {
            characters: HashMap::new(),
            words: RwLock::new(HashMap::new()),
        }
    }

    /// Create with the embedded character and word tables
    pub fn with_defaults() -> Self {
        Self::from_json(loader::CHARACTER_PINYIN_JSON, loader::WORD_PINYIN_JSON).unwrap_or_else(
            |e| {
                tracing::error!("Failed to load embedded pinyin tables: {}", e);
                tracing::warn!("Starting with empty pinyin tables");
                Self::new()
            },
        )
    }

    /// Parse `[[key, pinyin], ...]` tables, later pairs win
    pub fn from_json(characters_json: &str, words_json: &str) -> Result<Self, LoadError> {
        let character_pairs: Vec<(String, String)> = serde_json::from_str(characters_json)
            .map_err(LoadError::format("pinyin characters"))?;
        let word_pairs: Vec<(String, String)> =
            serde_json::from_str(words_json).map_err(LoadError::format("pinyin words"))?;

        let mut characters = HashMap::new();
        for (key, pinyin) in loader::last_write_wins("pinyin characters", character_pairs) {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    characters.insert(c, pinyin);
                }
                _ => {
                    return Err(LoadError::InvalidEntry {
                        table: "pinyin characters",
                        message: format!("'{}' is not a single character", key),
                    });
                }
            }
        }

        let words = loader::last_write_wins(
            "pinyin words",
            word_pairs
                .into_iter()
                .map(|(word, pinyin)| (lookup_key(&word), pinyin)),
        );

        tracing::debug!(
            "Pinyin tables: {} characters, {} words",
            characters.len(),
            words.len()
        );

        Ok(Self {
            characters,
            words: RwLock::new(words),
        })
    }

    /// Real transcription for a word, `None` if nothing was recognised
    pub fn lookup(&self, word: &str) -> Option<String> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }

        if let Some(pinyin) = self.words.read().get(&lookup_key(word)) {
            tracing::debug!("Found word mapping for '{}': {}", word, pinyin);
            return Some(pinyin.clone());
        }

        let mut syllables: Vec<&str> = Vec::new();
        for c in word.chars() {
            match self.characters.get(&c) {
                Some(pinyin) => syllables.push(pinyin),
                None if !syllables.is_empty() => {
                    tracing::debug!("Character '{}' not in pinyin table", c);
                    syllables.push(UNKNOWN_MARKER);
                }
                None => {}
            }
        }

        if syllables.is_empty() {
            return None;
        }

        Some(syllables.join(" "))
    }

    /// Convert a word to pinyin, always returns a displayable string
    pub fn convert(&self, word: &str) -> String {
        if word.trim().is_empty() {
            tracing::warn!("Received empty word for pinyin conversion");
            return NO_PINYIN.to_string();
        }

        self.lookup(word).unwrap_or_else(|| {
            tracing::debug!("Could not generate pinyin for '{}'", word);
            format!("Pinyin not available for '{}'", word)
        })
    }

    /// True if the word table has an entry for `word`
    pub fn has_mapping(&self, word: &str) -> bool {
        !word.trim().is_empty() && self.words.read().contains_key(&lookup_key(word))
    }

    /// Snapshot of the word table
    pub fn mappings(&self) -> HashMap<String, String> {
        self.words.read().clone()
    }

    /// Add or replace a word mapping, blank input is ignored
    pub fn add_mapping(&self, word: &str, pinyin: &str) {
        if word.trim().is_empty() || pinyin.trim().is_empty() {
            return;
        }

        self.words
            .write()
            .insert(lookup_key(word), pinyin.trim().to_string());
        tracing::info!("Added pinyin mapping: {} -> {}", word, pinyin);
    }
}

impl Default for PinyinConverter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
