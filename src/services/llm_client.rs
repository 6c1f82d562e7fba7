use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::prompts::Flow;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;
use url::Url;

/// Everything the backend needs for one structured completion.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub flow: Flow,
    pub system_prompt: String,
    pub prompt: String,
    pub output_schema: JsonValue,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Returns the model's structured output as raw JSON. Shape checks are the caller's job.
    async fn generate(&self, request: GenerationRequest) -> Result<JsonValue>;
}

#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    endpoint: Url,
    model: String,
    max_retries: u32,
}

impl OpenAiBackend {
    pub fn new(
        api_key: String,
        base_url: &Url,
        model: String,
        max_retries: u32,
        client: Client,
    ) -> Result<Self> {
        let endpoint = base_url
            .join("chat/completions")
            .map_err(|e| Error::Config(format!("Invalid completions endpoint: {}", e)))?;
        Ok(Self {
            client,
            api_key,
            endpoint,
            model,
            max_retries,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.generation_timeout_secs))
            .build()?;
        Self::new(
            config.openai_api_key.clone(),
            &config.openai_base_url,
            config.openai_model.clone(),
            config.generation_max_retries,
            client,
        )
    }

    fn build_payload(&self, request: &GenerationRequest) -> JsonValue {
        serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": request.system_prompt},
                {"role": "user", "content": request.prompt}
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": request.flow.name(),
                    "schema": request.output_schema,
                    "strict": true
                }
            },
            "temperature": 0.8
        })
    }

    async fn chat_completion(&self, payload: &JsonValue) -> Result<JsonValue> {
        let res = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status_err = res.error_for_status_ref().err();
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %text, "Generation provider returned an error status");
            return Err(match status_err {
                Some(err) => err.into(),
                None => anyhow::anyhow!("Provider error {}: {}", status, text).into(),
            });
        }

        let body: JsonValue = res.json().await?;
        extract_message_json(&body)
    }
}

fn extract_message_json(body: &JsonValue) -> Result<JsonValue> {
    let message = body
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .ok_or_else(|| Error::Generation("Provider response has no message".to_string()))?;

    if let Some(refusal) = message.get("refusal").and_then(|r| r.as_str()) {
        return Err(Error::Generation(format!("Model refused: {}", refusal)));
    }

    let content = message
        .get("content")
        .and_then(|c| c.as_str())
        .ok_or_else(|| Error::Generation("Provider message has no text content".to_string()))?;

    serde_json::from_str(content)
        .map_err(|e| Error::Generation(format!("Model content is not valid JSON: {}", e)))
}

#[async_trait]
impl GenerationBackend for OpenAiBackend {
    async fn generate(&self, request: GenerationRequest) -> Result<JsonValue> {
        let payload = self.build_payload(&request);
        let mut attempt: u32 = 0;

        loop {
            match self.chat_completion(&payload).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        flow = %request.flow,
                        attempt,
                        error = %err,
                        "Transient provider failure, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(500 * u64::from(attempt))).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
