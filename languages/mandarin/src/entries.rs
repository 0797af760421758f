use std::collections::HashMap;

use kamus_core::lookup_key;
use kamus_types::{DictionaryEntry, NO_EXAMPLES};
use serde::{Deserialize, Serialize};

use crate::loader::{self, LoadError};

#[derive(Debug, thiserror::Error)]
#[error("No curated entry for '{0}'")]
pub struct EntryNotFound(pub String);

/// Narrow per-word replacement applied to generated entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRule {
    pub word: String,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub is_adjective: Option<bool>,
}

/// Hand-authored entries and per-word overrides, keyed by lowercase source word
#[derive(Debug, Default)]
pub struct CuratedEntryStore {
    entries: HashMap<String, DictionaryEntry>,
    overrides: HashMap<String, OverrideRule>,
}

impl CuratedEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an entry array and an override array
    pub fn from_json(entries_json: &str, overrides_json: &str) -> Result<Self, LoadError> {
        let entries: Vec<DictionaryEntry> =
            serde_json::from_str(entries_json).map_err(LoadError::format("curated entries"))?;
        let overrides: Vec<OverrideRule> =
            serde_json::from_str(overrides_json).map_err(LoadError::format("overrides"))?;

        let entries = loader::last_write_wins(
            "curated entries",
            entries.into_iter().map(|mut entry| {
                entry.is_curated = true;
                if entry.examples.is_empty() {
                    entry.examples.push(NO_EXAMPLES.to_string());
                }
                (lookup_key(&entry.source_word), entry)
            }),
        );
        let overrides = loader::last_write_wins(
            "overrides",
            overrides
                .into_iter()
                .map(|rule| (lookup_key(&rule.word), rule)),
        );

        Ok(Self { entries, overrides })
    }

    pub fn has(&self, word: &str) -> bool {
        self.entries.contains_key(&lookup_key(word))
    }

    /// Curated entry for `word`, check [`has`](Self::has) first or treat the error as a miss
    pub fn get(&self, word: &str) -> Result<DictionaryEntry, EntryNotFound> {
        self.lookup(word)
            .cloned()
            .ok_or_else(|| EntryNotFound(word.to_string()))
    }

    pub fn lookup(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(&lookup_key(word))
    }

    pub fn pronunciation_override(&self, word: &str) -> Option<&str> {
        self.overrides
            .get(&lookup_key(word))
            .and_then(|rule| rule.pronunciation.as_deref())
            .filter(|pronunciation| !pronunciation.trim().is_empty())
    }

    pub fn adjective_override(&self, word: &str) -> Option<bool> {
        self.overrides
            .get(&lookup_key(word))
            .and_then(|rule| rule.is_adjective)
    }

    /// Curated source words, sorted
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .entries
            .values()
            .map(|entry| entry.source_word.as_str())
            .collect();
        words.sort_unstable();
        words
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Merge two stores, `other` wins per word
    pub fn merge(mut self, other: CuratedEntryStore) -> Self {
        self.entries.extend(other.entries);
        self.overrides.extend(other.overrides);
        self
    }
}
