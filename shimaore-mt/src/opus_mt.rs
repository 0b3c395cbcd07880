//! OPUS-MT inference endpoint provider
//!
//! The four directional MarianMT models (fr→en, en→sw, sw→en, en→fr) are
//! served by an inference server speaking a small JSON protocol:
//!
//! ```text
//! POST {base_url}/translate
//! {"text": "bonjour le monde", "source": "fr", "target": "en"}
//! → {"translation": "hello world"}
//! ```
//!
//! The endpoint URL comes from the `OPUS_MT_ENDPOINT` environment
//! variable (or explicit configuration). Requests carry a bounded
//! timeout so a stuck model call cannot hang a request forever.

use crate::error::{MtError, MtResult};
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// HTTP client for a MarianMT/OPUS-MT translation endpoint.
#[derive(Clone)]
pub struct OpusMtProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpusMtProvider {
    /// Maximum characters per translated string. Requests are validated
    /// to 1000 characters upstream; this is the provider's own guard.
    const MAX_CHARS_PER_STRING: usize = 5_000;

    /// Default per-request timeout when none is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a provider for an explicit endpoint URL.
    pub fn new(base_url: String, timeout: Duration) -> MtResult<Self> {
        if base_url.trim().is_empty() {
            return Err(MtError::ConfigError(
                "endpoint URL cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MtError::NetworkError(format!("failed to create HTTP client: {}", e)))?;

        Ok(OpusMtProvider {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a provider from the `OPUS_MT_ENDPOINT` environment variable.
    pub fn from_env() -> MtResult<Self> {
        let base_url = std::env::var("OPUS_MT_ENDPOINT").map_err(|_| {
            MtError::ConfigError("OPUS_MT_ENDPOINT environment variable not set".to_string())
        })?;
        Self::new(base_url, Self::DEFAULT_TIMEOUT)
    }
}

impl std::fmt::Debug for OpusMtProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpusMtProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for OpusMtProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        if text.chars().count() > Self::MAX_CHARS_PER_STRING {
            return Err(MtError::TranslationError(format!(
                "text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_STRING
            )));
        }

        let url = format!("{}/translate", self.base_url);
        let body = json!({
            "text": text,
            "source": source_lang,
            "target": target_lang,
        });

        tracing::debug!(%source_lang, %target_lang, "requesting translation hop");
        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("endpoint rejected request ({}): {}", status, error_text))
            } else {
                MtError::TranslationError(format!("endpoint error ({}): {}", status, error_text))
            });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| MtError::TranslationError(format!("failed to parse response: {}", e)))?;

        payload["translation"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                MtError::TranslationError(
                    "invalid response: missing 'translation' field".to_string(),
                )
            })
    }

    fn provider_name(&self) -> &str {
        "OPUS-MT endpoint"
    }
}
