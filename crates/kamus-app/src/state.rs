use std::sync::Arc;
use std::time::Duration;

use kamus_config::Config;
use kamus_explainer::{DeepSeekClient, Explainer, UnavailableExplainer};
use kamus_lang_mandarin::{DictionaryPipeline, EnhancementProfile};
use kamus_translator::{LibreTranslateClient, Translator, UnavailableTranslator};

pub struct AppState {
    pub pipeline: DictionaryPipeline,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.timeout_seconds);

        let translator: Arc<dyn Translator> = if config.translator.enabled {
            Arc::new(LibreTranslateClient::new(
                config.translator.api_url.clone(),
                config.translator.api_key.clone(),
                timeout,
            ))
        } else {
            tracing::warn!("Translation service disabled, unknown words will degrade");
            Arc::new(UnavailableTranslator)
        };

        let explainer: Arc<dyn Explainer> = if config.explainer.is_usable() {
            Arc::new(DeepSeekClient::new(
                config.explainer.api_url.clone(),
                config.explainer.api_key.clone(),
                config.explainer.model.clone(),
                timeout,
            ))
        } else {
            tracing::warn!("DEEPSEEK_API_KEY not set, only curated entries will resolve");
            Arc::new(UnavailableExplainer)
        };

        let profile = config
            .dictionary
            .enhancement
            .parse::<EnhancementProfile>()
            .unwrap_or_else(|e| {
                tracing::warn!("{}, using enhanced rules", e);
                EnhancementProfile::Enhanced
            });

        tracing::debug!(
            "Translator: {}, explainer: {} {}",
            translator.metadata().name,
            explainer.metadata().name,
            explainer.metadata().model
        );

        let pipeline = DictionaryPipeline::with_additional_tables(
            translator,
            explainer,
            profile,
            &config.dictionary.additional_entry_paths,
            &config.dictionary.additional_override_paths,
        );

        Self { pipeline }
    }
}
