use std::sync::Arc;

use futures_util::future::join_all;
use kamus_core::{DefaultPreprocessor, Language, Preprocessor, Script, lookup_key};
use kamus_explainer::{ExplainError, Explainer};
use kamus_translator::{TranslateError, Translator};
use kamus_types::{DictionaryEntry, MEANING_PLACEHOLDER};

use crate::enhancement::{EnhancementProfile, EnhancementRules};
use crate::entries::CuratedEntryStore;
use crate::generator::ExplanationGenerator;
use crate::loader::TableLoader;
use crate::mapping::TranslationTable;
use crate::pinyin::PinyinConverter;
use crate::resolver::TranslationResolver;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("{0}")]
    TranslationFailure(#[from] TranslateError),

    #[error("{0}")]
    GenerationFailure(#[from] ExplainError),

    #[error("Empty input")]
    EmptyInput,
}

/// Resolves one Malay or Mandarin word into a complete dictionary entry
pub struct DictionaryPipeline {
    store: Arc<CuratedEntryStore>,
    resolver: TranslationResolver,
    generator: ExplanationGenerator,
    pinyin: Arc<PinyinConverter>,
}

impl DictionaryPipeline {
    pub fn new(
        store: Arc<CuratedEntryStore>,
        resolver: TranslationResolver,
        generator: ExplanationGenerator,
        pinyin: Arc<PinyinConverter>,
    ) -> Self {
        Self {
            store,
            resolver,
            generator,
            pinyin,
        }
    }

    /// Embedded tables with the given collaborators
    pub fn with_collaborators(
        translator: Arc<dyn Translator>,
        explainer: Arc<dyn Explainer>,
    ) -> Self {
        Self::with_additional_tables(translator, explainer, EnhancementProfile::default(), &[], &[])
    }

    /// Embedded tables merged with additional entry and override files
    pub fn with_additional_tables(
        translator: Arc<dyn Translator>,
        explainer: Arc<dyn Explainer>,
        profile: EnhancementProfile,
        entry_paths: &[String],
        override_paths: &[String],
    ) -> Self {
        let store = Arc::new(TableLoader::load_entries_with_additional(
            entry_paths,
            override_paths,
        ));
        let pinyin = Arc::new(PinyinConverter::with_defaults());
        let rules = Arc::new(EnhancementRules::for_profile(profile));
        let table = Arc::new(TranslationTable::with_defaults());

        tracing::info!(
            "Dictionary ready: {} curated entries, {} enhancement rules ({:?})",
            store.len(),
            rules.len(),
            profile
        );

        Self::new(
            store,
            TranslationResolver::new(table, translator),
            ExplanationGenerator::new(explainer, rules, pinyin.clone()),
            pinyin,
        )
    }

    /// Resolve a word, failures come back as a degraded entry
    pub async fn resolve(&self, word: &str) -> DictionaryEntry {
        let word = DefaultPreprocessor.process(word);

        match self.try_resolve(&word).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Resolution of '{}' degraded: {}", word, e);
                DictionaryEntry::degraded(word, e)
            }
        }
    }

    /// Resolve independent words concurrently, results keep input order
    pub async fn resolve_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<DictionaryEntry> {
        join_all(words.iter().map(|word| self.resolve(word.as_ref()))).await
    }

    async fn try_resolve(&self, word: &str) -> Result<DictionaryEntry, ResolveError> {
        if word.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        if let Some(entry) = self.store.lookup(word) {
            tracing::info!("Curated entry for '{}'", word);
            return Ok(entry.clone());
        }

        let pronunciation_override = self.store.pronunciation_override(word);
        let adjective_override = self.store.adjective_override(word);
        tracing::debug!(
            "Overrides for '{}': pronunciation={:?}, adjective={:?}",
            word,
            pronunciation_override,
            adjective_override
        );

        let mut entry = match Script::classify(word) {
            Script::Cjk => {
                tracing::debug!("'{}' is Mandarin, explaining directly", word);
                let explanation = self.generator.generate(word, Language::Mandarin).await?;
                DictionaryEntry::from_explanation(MEANING_PLACEHOLDER, word, explanation)
            }
            Script::Latin => {
                let sentence = self.resolver.table().lookup_sentence(
                    word,
                    Language::Malay,
                    Language::Mandarin,
                );
                let (source, target) = match sentence {
                    Some(sentence) => (word.to_string(), sentence.to_string()),
                    None => {
                        let source = lookup_key(word);
                        let target = self
                            .resolver
                            .translate(&source, Language::Malay, Language::Mandarin)
                            .await?;
                        (source, target)
                    }
                };
                tracing::debug!("'{}' translated to '{}'", source, target);
                let explanation = self.generator.generate(&target, Language::Mandarin).await?;
                DictionaryEntry::from_explanation(source, target, explanation)
            }
        };

        if let Some(pronunciation) = pronunciation_override {
            entry.pronunciation = pronunciation.to_string();
        }
        if let Some(is_adjective) = adjective_override {
            entry.is_adjective = is_adjective;
        }

        Ok(entry)
    }

    pub fn store(&self) -> &CuratedEntryStore {
        &self.store
    }

    pub fn resolver(&self) -> &TranslationResolver {
        &self.resolver
    }

    pub fn pinyin(&self) -> &PinyinConverter {
        &self.pinyin
    }
}
