//! Generation backends.
//!
//! The remote backend calls the Gemini REST API with a primary model and
//! one fallback model. Absence of configuration, network errors, and
//! timeouts are all the same condition to callers: generation is
//! unavailable and the deterministic templates take over.

use std::time::Duration;

use advisor_core::{Error, GenerationConfig, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// A service that can turn a structured prompt into answer text.
#[async_trait]
pub trait GenerateBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Gemini-backed generation. One attempt per model, primary then fallback,
/// each bounded by the configured timeout.
pub struct RemoteBackend {
    client: Client,
    api_key: String,
    base_url: String,
    primary_model: String,
    fallback_model: String,
    timeout: Duration,
}

impl RemoteBackend {
    /// Build from config. Returns `None` when no API key is configured —
    /// the composer then goes straight to templates.
    pub fn from_config(config: &GenerationConfig) -> Option<Self> {
        let api_key = config.api_key.as_deref().filter(|k| !k.is_empty())?;
        Some(Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            primary_model: config.primary_model.clone(),
            fallback_model: config.fallback_model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// One bounded attempt against one model. The timeout covers the whole
    /// exchange, body included; a server that stalls mid-body times out
    /// the same as one that never answers.
    async fn call_model(&self, model: &str, prompt: &str) -> Result<String> {
        tokio::time::timeout(self.timeout, self.request_model(model, prompt))
            .await
            .map_err(|_| Error::GenerationTimeout(self.timeout.as_secs()))?
    }

    async fn request_model(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}]
        });

        debug!("Requesting generation from model {}", model);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Generation(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Generation(format!("API error {}: {}", status, body)));
        }

        let parsed: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Generation(format!("bad response body: {}", e)))?;

        parsed["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Generation("response carried no text".into()))
    }
}

#[async_trait]
impl GenerateBackend for RemoteBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        match self.call_model(&self.primary_model, prompt).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(
                    "Model {} failed ({}), trying {}",
                    self.primary_model, e, self.fallback_model
                );
                self.call_model(&self.fallback_model, prompt).await
            }
        }
    }
}
