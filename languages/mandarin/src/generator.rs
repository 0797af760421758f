use std::sync::Arc;

use kamus_core::Language;
use kamus_explainer::{ExplainError, Explainer};
use kamus_types::Explanation;

use crate::enhancement::EnhancementRules;
use crate::pinyin::PinyinConverter;

/// Explainer output, normalised and passed through the enhancement rules
pub struct ExplanationGenerator {
    explainer: Arc<dyn Explainer>,
    rules: Arc<EnhancementRules>,
    pinyin: Arc<PinyinConverter>,
}

impl ExplanationGenerator {
    pub fn new(
        explainer: Arc<dyn Explainer>,
        rules: Arc<EnhancementRules>,
        pinyin: Arc<PinyinConverter>,
    ) -> Self {
        Self {
            explainer,
            rules,
            pinyin,
        }
    }

    pub async fn generate(
        &self,
        word: &str,
        language: Language,
    ) -> Result<Explanation, ExplainError> {
        let explanation = self
            .explainer
            .explain(word, language.name())
            .await
            .inspect_err(|e| tracing::error!("Explanation for '{}' failed: {}", word, e))?
            .normalized();

        let mut explanation = self.rules.apply(word, explanation);

        if explanation.lacks_pronunciation() {
            if let Some(pinyin) = self.pinyin.lookup(word) {
                tracing::debug!("Filled pronunciation for '{}' from pinyin table", word);
                explanation.pronunciation = pinyin;
            }
        }

        Ok(explanation)
    }
}
