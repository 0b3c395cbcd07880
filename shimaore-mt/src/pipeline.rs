//! Request pipeline and result assembly
//!
//! `TranslationPipeline` drives a request end to end: classify, then
//! either answer from the lexicon directly or run the two-hop pivot
//! translation, and fold whatever happened into a `TranslationOutcome`.
//! Every capability failure is captured into the outcome's status — the
//! caller always receives a well-formed result, and nothing on this path
//! is fatal to the process.

use crate::classify::{Route, classify};
use crate::detector::LanguageDetector;
use crate::lexicon::Lexicon;
use crate::pivot::PivotTranslator;
use serde::Serialize;
use std::sync::Arc;

/// Fixed status vocabulary of the response contract.
///
/// The serialized strings are part of the external API and must not
/// change: `"success"`, `"word not found"`, `"unsupported language"`,
/// `"error: <cause>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success,
    WordNotFound,
    UnsupportedLanguage,
    Error(String),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::WordNotFound => write!(f, "word not found"),
            Status::UnsupportedLanguage => write!(f, "unsupported language"),
            Status::Error(cause) => write!(f, "error: {}", cause),
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Structured outcome of one translation request.
///
/// Created fresh per request and never mutated after being returned.
/// Absent fields serialize as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationOutcome {
    /// Trimmed, lower-cased echo of the request
    pub input: String,
    pub detected_language: Option<String>,
    pub translation: Option<String>,
    pub status: Status,
}

/// The assembled pipeline: lexicon, detector, and pivot orchestrator,
/// all loaded once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct TranslationPipeline {
    lexicon: Arc<Lexicon>,
    detector: Arc<dyn LanguageDetector>,
    pivot: PivotTranslator,
}

impl TranslationPipeline {
    pub fn new(
        lexicon: Arc<Lexicon>,
        detector: Arc<dyn LanguageDetector>,
        pivot: PivotTranslator,
    ) -> Self {
        TranslationPipeline {
            lexicon,
            detector,
            pivot,
        }
    }

    /// Process one sentence and assemble its outcome.
    ///
    /// The input is assumed to have passed request validation (non-empty
    /// after trimming, within the length cap) — that happens at the
    /// transport layer, before the pipeline is entered.
    pub async fn translate_input(&self, sentence: &str) -> TranslationOutcome {
        let input = sentence.trim().to_lowercase();

        let classification = match classify(&input, &self.lexicon, self.detector.as_ref()) {
            Ok(classification) => classification,
            Err(err) => {
                tracing::warn!(error = %err, "classification failed");
                return TranslationOutcome {
                    input,
                    detected_language: None,
                    translation: None,
                    status: Status::Error(err.to_string()),
                };
            }
        };
        tracing::debug!(route = ?classification.route, "request classified");

        let mut outcome = TranslationOutcome {
            input: input.clone(),
            detected_language: classification.language,
            translation: None,
            status: Status::Success,
        };

        match classification.route {
            Route::DirectForward => {
                let word = input.split_whitespace().next().unwrap_or_default();
                outcome.translation = self.lexicon.french_to_shimaore(word).map(str::to_string);
            }
            Route::DirectReverse => {
                let word = input.split_whitespace().next().unwrap_or_default();
                outcome.translation = self.lexicon.shimaore_to_french(word).map(str::to_string);
            }
            Route::WordNotFound => {
                outcome.status = Status::WordNotFound;
            }
            Route::Unsupported => {
                outcome.status = Status::UnsupportedLanguage;
            }
            Route::PivotFromFrench => match self.pivot.french_to_shimaore(&input).await {
                Ok(translation) => outcome.translation = Some(translation),
                Err(err) => {
                    tracing::warn!(error = %err, "pivot translation failed");
                    outcome.status = Status::Error(err.to_string());
                }
            },
            Route::PivotFromShimaore => match self.pivot.shimaore_to_french(&input).await {
                Ok(translation) => outcome.translation = Some(translation),
                Err(err) => {
                    tracing::warn!(error = %err, "pivot translation failed");
                    outcome.status = Status::Error(err.to_string());
                }
            },
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDetector, MockMode, MockTranslator};
    use std::time::Duration;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::from_rows(vec![
            ("bonjour".to_string(), "kwezi".to_string()),
            ("jambo".to_string(), "bonjour".to_string()),
        ]))
    }

    fn pipeline_with(translator: MockTranslator, detector: MockDetector) -> TranslationPipeline {
        let lexicon = lexicon();
        let pivot = PivotTranslator::uniform(
            Arc::new(translator),
            lexicon.clone(),
            Duration::from_secs(5),
        );
        TranslationPipeline::new(lexicon, Arc::new(detector), pivot)
    }

    fn uppercase_pipeline() -> TranslationPipeline {
        pipeline_with(
            MockTranslator::new(MockMode::Uppercase),
            MockDetector::returning("fr"),
        )
    }

    // ========== Direct lookup ==========

    #[tokio::test]
    async fn test_single_french_word_answers_from_lexicon() {
        let outcome = uppercase_pipeline().translate_input("bonjour").await;
        assert_eq!(outcome.input, "bonjour");
        assert_eq!(outcome.detected_language.as_deref(), Some("fr"));
        assert_eq!(outcome.translation.as_deref(), Some("kwezi"));
        assert_eq!(outcome.status, Status::Success);
    }

    #[tokio::test]
    async fn test_single_shimaore_word_answers_from_reverse_lexicon() {
        let outcome = uppercase_pipeline().translate_input("kwezi").await;
        assert_eq!(outcome.detected_language.as_deref(), Some("sw"));
        assert_eq!(outcome.translation.as_deref(), Some("bonjour"));
        assert_eq!(outcome.status, Status::Success);
    }

    #[tokio::test]
    async fn test_input_echo_is_trimmed_and_lowercased() {
        let outcome = uppercase_pipeline().translate_input("  Bonjour  ").await;
        assert_eq!(outcome.input, "bonjour");
        assert_eq!(outcome.translation.as_deref(), Some("kwezi"));
    }

    #[tokio::test]
    async fn test_unknown_single_word_is_word_not_found() {
        let outcome = uppercase_pipeline().translate_input("xyz").await;
        assert_eq!(outcome.status, Status::WordNotFound);
        assert_eq!(outcome.translation, None);
        assert_eq!(outcome.detected_language, None);
    }

    // ========== Pivot routes ==========

    #[tokio::test]
    async fn test_code_mixed_sentence_takes_the_french_route() {
        let outcome = uppercase_pipeline().translate_input("bonjour jambo").await;
        assert_eq!(outcome.detected_language.as_deref(), Some("fr"));
        // Both words rewritten through the forward lexicon, then two
        // uppercase hops.
        assert_eq!(outcome.translation.as_deref(), Some("KWEZI BONJOUR"));
        assert_eq!(outcome.status, Status::Success);
    }

    #[tokio::test]
    async fn test_detector_backed_french_sentence_is_pivot_translated() {
        let outcome = uppercase_pipeline()
            .translate_input("nous allons bien")
            .await;
        assert_eq!(outcome.detected_language.as_deref(), Some("fr"));
        assert_eq!(outcome.translation.as_deref(), Some("NOUS ALLONS BIEN"));
        assert_eq!(outcome.status, Status::Success);
    }

    #[tokio::test]
    async fn test_detector_backed_shimaore_sentence_uses_reverse_route() {
        let pipeline = pipeline_with(
            MockTranslator::new(MockMode::Uppercase),
            MockDetector::returning("sw"),
        );
        let outcome = pipeline.translate_input("narende tsena").await;
        assert_eq!(outcome.detected_language.as_deref(), Some("sw"));
        assert_eq!(outcome.translation.as_deref(), Some("NARENDE TSENA"));
        assert_eq!(outcome.status, Status::Success);
    }

    // ========== Non-success statuses ==========

    #[tokio::test]
    async fn test_unsupported_language_passes_detector_code_through() {
        let pipeline = pipeline_with(
            MockTranslator::new(MockMode::Uppercase),
            MockDetector::returning("de"),
        );
        let outcome = pipeline.translate_input("wir sind hier").await;
        assert_eq!(outcome.status, Status::UnsupportedLanguage);
        assert_eq!(outcome.detected_language.as_deref(), Some("de"));
        assert_eq!(outcome.translation, None);
    }

    #[tokio::test]
    async fn test_capability_failure_becomes_error_status() {
        let pipeline = pipeline_with(
            MockTranslator::new(MockMode::Error("endpoint down".to_string())),
            MockDetector::returning("fr"),
        );
        let outcome = pipeline.translate_input("bonjour le monde").await;
        assert!(outcome.status.to_string().starts_with("error: "));
        assert_eq!(outcome.translation, None);
        // Classification already happened, so the language survives.
        assert_eq!(outcome.detected_language.as_deref(), Some("fr"));
    }

    #[tokio::test]
    async fn test_detector_failure_becomes_error_status() {
        let pipeline = pipeline_with(
            MockTranslator::new(MockMode::Uppercase),
            MockDetector::failing("no signal"),
        );
        let outcome = pipeline.translate_input("zzz qqq ppp").await;
        assert!(outcome.status.to_string().starts_with("error: "));
        assert_eq!(outcome.translation, None);
        assert_eq!(outcome.detected_language, None);
    }

    // ========== Serialization contract ==========

    #[tokio::test]
    async fn test_outcome_serializes_with_exact_status_strings() {
        let outcome = uppercase_pipeline().translate_input("bonjour").await;
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["input"], "bonjour");
        assert_eq!(value["translation"], "kwezi");
        assert_eq!(value["detected_language"], "fr");
    }

    #[tokio::test]
    async fn test_absent_fields_serialize_as_null() {
        let outcome = uppercase_pipeline().translate_input("xyz").await;
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "word not found");
        assert!(value["translation"].is_null());
        assert!(value["detected_language"].is_null());
    }

    #[test]
    fn test_status_display_strings() {
        assert_eq!(Status::Success.to_string(), "success");
        assert_eq!(Status::WordNotFound.to_string(), "word not found");
        assert_eq!(Status::UnsupportedLanguage.to_string(), "unsupported language");
        assert_eq!(
            Status::Error("boom".to_string()).to_string(),
            "error: boom"
        );
    }
}
