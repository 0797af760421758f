use std::time::Duration;

use async_trait::async_trait;
use kamus_types::Explanation;
use serde::{Deserialize, Serialize};

use crate::parse::parse_explanation;
use crate::{ExplainError, Explainer, ProviderMetadata};

const SYSTEM_PROMPT: &str = "You are a Mandarin teacher writing a Malay-Chinese learner's dictionary. \
Reply with a single JSON object with the keys \"explanation\" (string, in Malay), \
\"examples\" (array of 3 strings, each a Chinese sentence followed by a newline and its Malay translation), \
\"pronunciation\" (pinyin with tone marks) and \"isAdjective\" (boolean).";

/// OpenAI-compatible chat completion client for DeepSeek
#[derive(Clone)]
pub struct DeepSeekClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl DeepSeekClient {
    pub fn new(api_url: String, api_key: String, model: String, timeout: Duration) -> Self {
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
            model,
        }
    }

    fn user_prompt(word: &str, language: &str) -> String {
        format!("Explain the {language} word \"{word}\" for a Malay speaker.")
    }

    /// Send one chat completion and return the first message content
    async fn complete(&self, user_prompt: String) -> Result<String, ExplainError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.3,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status == 401 || status == 403 {
            return Err(ExplainError::AuthenticationError);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Explanation API returned {}: {}", status, body);
            return Err(ExplainError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            ExplainError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ExplainError::InvalidResponse("No choices in response".to_string()))
    }
}

#[async_trait]
impl Explainer for DeepSeekClient {
    async fn explain(&self, word: &str, language: &str) -> Result<Explanation, ExplainError> {
        if self.api_key.is_empty() {
            return Err(ExplainError::AuthenticationError);
        }

        tracing::debug!("Requesting explanation for '{}' ({})", word, language);

        let content = self.complete(Self::user_prompt(word, language)).await?;
        let explanation = parse_explanation(&content)?;

        tracing::debug!(
            "Explanation for '{}': pronunciation='{}', {} examples, adjective={}",
            word,
            explanation.pronunciation,
            explanation.examples.len(),
            explanation.is_adjective
        );

        Ok(explanation)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepSeek".to_string(),
            model: self.model.clone(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}
