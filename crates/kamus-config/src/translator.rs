use std::env;

use serde::{Deserialize, Serialize};

/// Value shipped in sample env files, never a real key
const PLACEHOLDER_KEY: &str = "your_libretranslate_api_key";

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "http://localhost:5000/translate".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Optional, LibreTranslate instances may run keyless
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: None,
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_url = env::var("LIBRETRANSLATE_API_URL").unwrap_or_else(|_| default_api_url());
        let api_key = env::var("LIBRETRANSLATE_API_KEY").ok();

        Self {
            enabled: default_enabled(),
            api_url,
            api_key,
        }
        .sanitized()
    }

    /// Drop empty or placeholder keys
    pub fn sanitized(mut self) -> Self {
        self.api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty() && key != PLACEHOLDER_KEY);
        self
    }
}
