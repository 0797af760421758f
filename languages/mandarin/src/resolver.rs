use std::sync::Arc;

use kamus_core::Language;
use kamus_translator::{TranslateError, Translator};

use crate::mapping::TranslationTable;

/// Curated pairs first, the live translator only on a miss
pub struct TranslationResolver {
    table: Arc<TranslationTable>,
    translator: Arc<dyn Translator>,
}

impl TranslationResolver {
    pub fn new(table: Arc<TranslationTable>, translator: Arc<dyn Translator>) -> Self {
        Self { table, translator }
    }

    pub async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslateError> {
        if let Some(sentence) = self.table.lookup_sentence(text, from, to) {
            tracing::debug!("Curated sentence pair for '{}'", text);
            return Ok(sentence.to_string());
        }

        if let Some(word) = self.table.lookup_word(text, from, to) {
            tracing::debug!("Curated word pair: {} -> {}", text, word);
            return Ok(word.to_string());
        }

        let (from_code, to_code) = (from.code().to_string(), to.code().to_string());
        let supported = self.translator.supported_languages();
        if !supported.is_empty() && !supported.contains(&(from_code.clone(), to_code.clone())) {
            tracing::warn!(
                "{} does not translate {} -> {}",
                self.translator.metadata().name,
                from_code,
                to_code
            );
            return Err(TranslateError::UnsupportedLanguagePair {
                from: from_code,
                to: to_code,
            });
        }

        tracing::debug!("No curated pair for '{}' ({} -> {})", text, from_code, to_code);

        let translation = self
            .translator
            .translate(text, from_code, to_code)
            .await
            .inspect_err(|e| tracing::error!("Translation of '{}' failed: {}", text, e))?;

        tracing::debug!("{} translated '{}' to '{}'", translation.provider, text, translation.text);
        Ok(translation.text)
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}
