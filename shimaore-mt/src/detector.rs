//! Statistical language identification
//!
//! The classifier only consults a detector when the lexicon offers no
//! signal, so detection is modeled as an injected capability: the pipeline
//! holds a `LanguageDetector` trait object and tests swap in a
//! deterministic stub.

use crate::error::{MtError, MtResult};
use whatlang::{Detector, Lang};

/// Language-identification capability.
///
/// `detect` returns an ISO-style language code for the dominant language
/// of the text, or an error when the input carries too little signal to
/// classify (very short or degenerate strings).
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> MtResult<String>;

    /// Name of this detector, for logging.
    fn detector_name(&self) -> &str;
}

/// Trigram-based detector backed by the `whatlang` crate.
pub struct WhatlangDetector {
    detector: Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        tracing::debug!("initializing whatlang language detector");
        WhatlangDetector {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> MtResult<String> {
        let info = self.detector.detect(text).ok_or_else(|| {
            MtError::DetectionError(format!(
                "could not determine language of {:?}",
                text
            ))
        })?;

        // Map onto the two-letter codes the pipeline routes on; anything
        // else is passed through as whatlang's own code for diagnostics.
        let code = match info.lang() {
            Lang::Fra => "fr",
            Lang::Swa => "sw",
            Lang::Eng => "en",
            other => other.code(),
        };
        Ok(code.to_string())
    }

    fn detector_name(&self) -> &str {
        "whatlang"
    }
}
