use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.deepseek.com/chat/completions".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ExplainerConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: String::new(),
            model: default_model(),
        }
    }
}

impl ExplainerConfig {
    pub fn new() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: env::var("DEEPSEEK_API_URL").unwrap_or_else(|_| default_api_url()),
            api_key: env::var("DEEPSEEK_API_KEY").unwrap_or_default(),
            model: env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| default_model()),
        }
    }

    /// Generation needs a key, an enabled flag alone is not enough
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}
