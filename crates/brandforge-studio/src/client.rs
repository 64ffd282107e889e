//! Generative API client port and its hosted implementation.
//!
//! The rest of the studio only sees [`GenerativeClient`]; panel controllers
//! are tested against scripted fakes and the hosted client can be swapped for
//! any other provider speaking the same three request shapes.

use crate::config::StudioConfig;
use async_trait::async_trait;
use brandforge_core::AspectRatio;
use serde_json::{Value, json};
use std::time::Duration;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Failure modes of a generation request. Rate limiting is distinguished so
/// callers can message it; everything else is terminal for the request.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider rejected the API credentials")]
    Auth,
    #[error("provider rate limit reached")]
    RateLimited,
    #[error("provider error (status {status}): {message}")]
    Provider { status: u16, message: String },
    #[error("provider returned no usable content")]
    EmptyResponse,
}

/// Abstract generation surface: one prompt in, one payload out.
///
/// Image results are returned as `data:image/...;base64,` URIs ready for
/// display or persistence; `Ok(None)` means the provider answered without an
/// image part, which is not an error. Structured results are the raw JSON
/// text, handed to the blueprint parser unchanged.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<Option<String>>;

    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String>;

    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

/// Hosted Gemini client over the `generateContent` REST surface.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: StudioConfig,
}

impl GeminiClient {
    pub fn new(config: StudioConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate(&self, model: &str, body: Value) -> Result<Value> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(ProviderError::Auth);
        };

        tracing::debug!(model, "dispatching generateContent request");
        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ProviderError::Auth);
        }
        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Provider {
                status: status.as_u16(),
                message: truncate(&message, 300),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<Option<String>> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "imageConfig": { "aspectRatio": aspect_ratio.as_str() }
            }
        });
        let response = self.generate(&self.config.image_model, body).await?;
        Ok(first_inline_image(&response))
    }

    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });
        let response = self.generate(&self.config.text_model, body).await?;
        concatenated_text(&response).ok_or(ProviderError::EmptyResponse)
    }

    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": self.config.temperature }
        });
        let response = self.generate(&self.config.text_model, body).await?;
        concatenated_text(&response).ok_or(ProviderError::EmptyResponse)
    }
}

fn candidate_parts(response: &Value) -> impl Iterator<Item = &Value> {
    response
        .get("candidates")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|c| c.get("content").and_then(|c| c.get("parts")))
        .filter_map(Value::as_array)
        .flatten()
}

/// First inline image across all candidates, as a data URI.
fn first_inline_image(response: &Value) -> Option<String> {
    candidate_parts(response).find_map(|part| {
        let inline = part.get("inlineData")?;
        let data = inline.get("data").and_then(Value::as_str)?;
        let mime = inline
            .get("mimeType")
            .and_then(Value::as_str)
            .unwrap_or("image/png");
        Some(format!("data:{mime};base64,{data}"))
    })
}

/// Concatenated text parts across all candidates, `None` when empty.
fn concatenated_text(response: &Value) -> Option<String> {
    let mut out = String::new();
    for part in candidate_parts(response) {
        if let Some(text) = part.get("text").and_then(Value::as_str) {
            out.push_str(text);
        }
    }
    if out.trim().is_empty() { None } else { Some(out) }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
