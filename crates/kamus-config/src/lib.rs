use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::explainer::ExplainerConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod explainer;
pub mod translator;

fn default_timeout_seconds() -> u64 {
    120
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub explainer: ExplainerConfig,
    pub dictionary: DictionaryConfig,

    /// Upstream HTTP timeout shared by both clients
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            explainer: ExplainerConfig::default(),
            dictionary: DictionaryConfig::default(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    /// Build config from environment variables
    pub fn new() -> Self {
        let timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds); // 2 minutes default

        Config {
            translator: TranslatorConfig::new(),
            explainer: ExplainerConfig::new(),
            dictionary: DictionaryConfig::new(),

            timeout_seconds,
        }
    }

    /// Load config from a JSON file, missing fields use defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)?;
        config.translator = config.translator.sanitized();
        Ok(config)
    }
}
