use brandforge_core::Resolution;
use serde::{Deserialize, Serialize};

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Generation defaults and provider endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Provider API key. Left unset, requests fail with an auth error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    /// Model used for text and structured JSON generation.
    pub text_model: String,
    /// Model used for image generation.
    pub image_model: String,
    pub temperature: f64,
    pub default_resolution: Resolution,
    pub request_timeout_secs: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            text_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            temperature: 0.7,
            default_resolution: Resolution::FullHd,
            request_timeout_secs: 30,
        }
    }
}

impl StudioConfig {
    /// Defaults plus the API key from the environment, when present.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            ..Self::default()
        }
    }
}
