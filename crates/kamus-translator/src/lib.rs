mod libre;

pub use libre::LibreTranslateClient;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Supported (from, to) pairs, empty when the provider does not restrict pairs
    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Translation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Translation service is not configured")]
    Unavailable,
}

/// Stand-in used when no translation service is configured
pub struct UnavailableTranslator;

#[async_trait::async_trait]
impl Translator for UnavailableTranslator {
    async fn translate(
        &self,
        _text: &str,
        _from: LanguageCode,
        _to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        Err(TranslateError::Unavailable)
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        vec![]
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "unavailable".to_string(),
        }
    }
}
