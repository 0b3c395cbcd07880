//! Mock capabilities for testing
//!
//! Deterministic, network-free stand-ins for the translation endpoint and
//! the statistical detector, so the routing pipeline can be exercised
//! without models or API access.

use crate::detector::LanguageDetector;
use crate::error::{MtError, MtResult};
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Mock translation behaviors.
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Uppercase the input: a visible, reversible pivot stand-in
    /// ("bonjour" → "BONJOUR")
    Uppercase,

    /// Predefined (text, target_lang) → translation mappings; unknown
    /// inputs fall back to uppercasing
    Mappings(HashMap<(String, String), String>),

    /// Fail every call with the given message
    Error(String),

    /// Return the input unchanged
    NoOp,
}

/// Mock translator simulating the directional translation capability.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated inference delay
    delay_ms: u64,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        MockTranslator { mode, delay_ms: 0 }
    }

    /// Mock with a simulated per-call delay, for timeout tests.
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        MockTranslator { mode, delay_ms }
    }

    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Uppercase => Ok(text.to_uppercase()),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| text.to_uppercase()))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        target_lang: &str,
    ) -> MtResult<String> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        self.apply_translation(text, target_lang)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

/// Mock detector returning a fixed language code, or a forced failure.
#[derive(Debug, Clone)]
pub struct MockDetector {
    answer: Result<String, String>,
}

impl MockDetector {
    /// Always detect the given code.
    pub fn returning(code: &str) -> Self {
        MockDetector {
            answer: Ok(code.to_string()),
        }
    }

    /// Always fail, simulating degenerate input.
    pub fn failing(message: &str) -> Self {
        MockDetector {
            answer: Err(message.to_string()),
        }
    }
}

impl LanguageDetector for MockDetector {
    fn detect(&self, _text: &str) -> MtResult<String> {
        match &self.answer {
            Ok(code) => Ok(code.clone()),
            Err(msg) => Err(MtError::DetectionError(msg.clone())),
        }
    }

    fn detector_name(&self) -> &str {
        "Mock Detector"
    }
}
