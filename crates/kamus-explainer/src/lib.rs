mod deepseek;
mod parse;

pub use deepseek::DeepSeekClient;
pub use parse::split_examples;

use kamus_types::Explanation;

/// Generative explanation provider interface
#[async_trait::async_trait]
pub trait Explainer: Send + Sync {
    /// Explain `word` for a learner, `language` names the word's language
    async fn explain(&self, word: &str, language: &str) -> Result<Explanation, ExplainError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("Explanation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Explanation service is not configured")]
    Unavailable,
}

/// Stand-in used when no explanation service is configured
pub struct UnavailableExplainer;

#[async_trait::async_trait]
impl Explainer for UnavailableExplainer {
    async fn explain(&self, _word: &str, _language: &str) -> Result<Explanation, ExplainError> {
        Err(ExplainError::Unavailable)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "unavailable".to_string(),
            model: String::new(),
        }
    }
}
