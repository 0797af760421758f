use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

#[derive(Clone)]
pub struct LibreTranslateClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(api_url: String, api_key: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreTranslateResponse {
    translated_text: Option<String>,
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let request = LibreTranslateRequest {
            q: text,
            source: &from,
            target: &to,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        tracing::debug!("Calling LibreTranslate at {}: '{}' {} -> {}", self.api_url, text, from, to);

        let response = self.client.post(&self.api_url).json(&request).send().await?;
        let status = response.status();

        if status == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if status == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("LibreTranslate returned {}: {}", status, body);
            return Err(TranslateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: LibreTranslateResponse = response.json().await.map_err(|e| {
            TranslateError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = body
            .translated_text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| TranslateError::InvalidResponse("No translation in response".to_string()))?;

        tracing::debug!("LibreTranslate: '{}' -> '{}'", text, translated_text);

        Ok(Translation {
            text: translated_text,
            provider: "libretranslate".to_string(),
        })
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        vec![
            ("ms".to_string(), "zh".to_string()),
            ("zh".to_string(), "ms".to_string()),
        ]
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
        }
    }
}
