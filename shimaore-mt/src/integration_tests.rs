//! End-to-end pipeline tests
//!
//! These exercise the whole chain — CSV dataset on disk, lexicon build,
//! classification, and pivot orchestration — with mock capabilities, so
//! they run without models or network access.

#[cfg(test)]
mod tests {
    use crate::dataset;
    use crate::mock::{MockDetector, MockMode, MockTranslator};
    use crate::pipeline::{Status, TranslationPipeline};
    use crate::pivot::PivotTranslator;
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Duration;

    fn pipeline_from_csv(detector: MockDetector) -> TranslationPipeline {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"text,target\nbonjour,kwezi\njambo,bonjour\n")
            .unwrap();
        let lexicon = Arc::new(dataset::load_lexicon(file.path()).unwrap());

        let pivot = PivotTranslator::uniform(
            Arc::new(MockTranslator::new(MockMode::Uppercase)),
            lexicon.clone(),
            Duration::from_secs(5),
        );
        TranslationPipeline::new(lexicon, Arc::new(detector), pivot)
    }

    #[tokio::test]
    async fn test_single_word_lookup_end_to_end() {
        let pipeline = pipeline_from_csv(MockDetector::returning("fr"));
        let outcome = pipeline.translate_input("bonjour").await;

        assert_eq!(outcome.input, "bonjour");
        assert_eq!(outcome.detected_language.as_deref(), Some("fr"));
        assert_eq!(outcome.translation.as_deref(), Some("kwezi"));
        assert_eq!(outcome.status, Status::Success);
    }

    #[tokio::test]
    async fn test_unknown_word_end_to_end() {
        let pipeline = pipeline_from_csv(MockDetector::returning("fr"));
        let outcome = pipeline.translate_input("xyz").await;

        assert_eq!(outcome.status, Status::WordNotFound);
        assert_eq!(outcome.translation, None);
    }

    #[tokio::test]
    async fn test_code_mixed_sentence_end_to_end() {
        let pipeline = pipeline_from_csv(MockDetector::returning("de"));
        let outcome = pipeline.translate_input("bonjour jambo").await;

        // Matches on both sides of the lexicon resolve to the French
        // route, whatever the detector would have said.
        assert_eq!(outcome.detected_language.as_deref(), Some("fr"));
        assert_eq!(outcome.status, Status::Success);
        assert_eq!(outcome.translation.as_deref(), Some("KWEZI BONJOUR"));
    }

    #[tokio::test]
    async fn test_unsupported_language_end_to_end() {
        let pipeline = pipeline_from_csv(MockDetector::returning("de"));
        let outcome = pipeline.translate_input("wir sind hier").await;

        assert_eq!(outcome.status, Status::UnsupportedLanguage);
        assert_eq!(outcome.detected_language.as_deref(), Some("de"));
        assert_eq!(outcome.translation, None);
    }

    #[tokio::test]
    async fn test_failed_capability_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"text,target\nbonjour,kwezi\n").unwrap();
        let lexicon = Arc::new(dataset::load_lexicon(file.path()).unwrap());

        let pivot = PivotTranslator::uniform(
            Arc::new(MockTranslator::new(MockMode::Error("model crashed".to_string()))),
            lexicon.clone(),
            Duration::from_secs(5),
        );
        let pipeline = TranslationPipeline::new(
            lexicon,
            Arc::new(MockDetector::returning("fr")),
            pivot,
        );

        let outcome = pipeline.translate_input("bonjour tout le monde").await;
        assert!(outcome.status.to_string().starts_with("error: "));
        assert!(outcome.status.to_string().contains("model crashed"));
        assert_eq!(outcome.translation, None);
    }
}
