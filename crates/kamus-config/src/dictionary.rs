use std::env;

use serde::{Deserialize, Serialize};

fn default_enhancement() -> String {
    "enhanced".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Enhancement rule set: "enhanced" or "minimal"
    #[serde(default = "default_enhancement")]
    pub enhancement: String,
    /// Extra curated entry tables merged over the embedded one
    #[serde(default)]
    pub additional_entry_paths: Vec<String>,
    /// Extra override tables merged over the embedded one
    #[serde(default)]
    pub additional_override_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enhancement: default_enhancement(),
            additional_entry_paths: vec![],
            additional_override_paths: vec![],
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let enhancement = env::var("KAMUS_ENHANCEMENT").unwrap_or_else(|_| default_enhancement());

        Self {
            enhancement,
            ..Default::default()
        }
    }
}
