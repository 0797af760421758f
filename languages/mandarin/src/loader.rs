use std::collections::HashMap;
use std::path::Path;

use crate::entries::CuratedEntryStore;

pub(crate) const CHARACTER_PINYIN_JSON: &str = include_str!("../data/pinyin_characters.json");
pub(crate) const WORD_PINYIN_JSON: &str = include_str!("../data/pinyin_words.json");
pub(crate) const TRANSLATIONS_JSON: &str = include_str!("../data/translations.json");
pub(crate) const CURATED_ENTRIES_JSON: &str = include_str!("../data/curated_entries.json");
pub(crate) const OVERRIDES_JSON: &str = include_str!("../data/overrides.json");
pub(crate) const ENHANCEMENTS_JSON: &str = include_str!("../data/enhancements.json");

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid format in {table}: {source}")]
    InvalidFormat {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid entry in {table}: {message}")]
    InvalidEntry { table: &'static str, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoadError {
    pub(crate) fn format(table: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| LoadError::InvalidFormat { table, source }
    }
}

pub struct TableLoader;

impl TableLoader {
    /// Load the embedded curated entries and overrides
    pub fn load_embedded_entries() -> Result<CuratedEntryStore, LoadError> {
        tracing::info!("Loading embedded curated entries...");
        let store = CuratedEntryStore::from_json(CURATED_ENTRIES_JSON, OVERRIDES_JSON)?;
        tracing::info!(
            "Loaded {} curated entries, {} overrides",
            store.len(),
            store.override_count()
        );
        Ok(store)
    }

    /// Load curated entries from a JSON file
    pub fn load_entries_from_file(path: &Path) -> Result<CuratedEntryStore, LoadError> {
        tracing::info!("Loading curated entries from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let store = CuratedEntryStore::from_json(&json, "[]")?;
        tracing::info!("Loaded {} curated entries from file", store.len());
        Ok(store)
    }

    /// Load override rules from a JSON file
    pub fn load_overrides_from_file(path: &Path) -> Result<CuratedEntryStore, LoadError> {
        tracing::info!("Loading overrides from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let store = CuratedEntryStore::from_json("[]", &json)?;
        tracing::info!("Loaded {} overrides from file", store.override_count());
        Ok(store)
    }

    /// Embedded store merged with additional files, later files win per word
    pub fn load_entries_with_additional(
        entry_paths: &[String],
        override_paths: &[String],
    ) -> CuratedEntryStore {
        let mut store = Self::load_embedded_entries().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded curated entries: {}", e);
            tracing::warn!("Starting with empty curated entry store");
            CuratedEntryStore::new()
        });

        for path in entry_paths {
            match Self::load_entries_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional curated entries from: {}", path);
                    store = store.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load curated entries from {}: {}", path, e);
                }
            }
        }

        for path in override_paths {
            match Self::load_overrides_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional overrides from: {}", path);
                    store = store.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load overrides from {}: {}", path, e);
                }
            }
        }

        store
    }
}

/// Build a lookup map where the last occurrence of a key wins.
///
/// Conflicting duplicates are a data-quality issue in the tables and get a
/// warning; repeated identical pairs are only traced.
pub(crate) fn last_write_wins<V>(
    table: &str,
    pairs: impl IntoIterator<Item = (String, V)>,
) -> HashMap<String, V>
where
    V: PartialEq + std::fmt::Debug,
{
    let mut map = HashMap::new();

    for (key, value) in pairs {
        if let Some(previous) = map.get(&key) {
            if *previous != value {
                tracing::warn!(
                    "{}: duplicate key '{}' ({:?} replaced by {:?})",
                    table,
                    key,
                    previous,
                    value
                );
            } else {
                tracing::trace!("{}: repeated key '{}'", table, key);
            }
        }
        map.insert(key, value);
    }

    map
}
