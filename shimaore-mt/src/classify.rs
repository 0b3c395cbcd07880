//! Language classification and route selection
//!
//! The classifier decides, per request, whether a deterministic dictionary
//! lookup suffices or a two-hop pivot translation is required. The lexicon
//! is consulted first; the statistical detector is a fallback and is only
//! invoked when no token matches either side of the lexicon.
//!
//! Decision order for multi-token input is a fixed contract: the French
//! side of the lexicon is checked before the Shimaore side, so a
//! code-mixed sentence matching both always takes the French route.

use crate::detector::LanguageDetector;
use crate::error::MtResult;
use crate::lexicon::Lexicon;
use crate::{FRENCH, SHIMAORE};
use regex::Regex;
use std::sync::LazyLock;

/// Strips everything except word characters and whitespace before the
/// text is handed to the statistical detector.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("literal pattern"));

/// Which processing path a request takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Single token found in the French → Shimaore map
    DirectForward,
    /// Single token found in the Shimaore → French map
    DirectReverse,
    /// Single token absent from both maps
    WordNotFound,
    /// Multi-token input translated French → English → Shimaore
    PivotFromFrench,
    /// Multi-token input translated Shimaore → English → French
    PivotFromShimaore,
    /// The detector reported a language outside the supported set
    Unsupported,
}

/// Classifier outcome: the dominant language (when one was determined)
/// and the selected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub language: Option<String>,
    pub route: Route,
}

/// Remove all non-word, non-space characters and lower-case the rest.
pub fn clean_text(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Classify `text` and pick its route.
///
/// Lexicon matching operates on the raw whitespace-split tokens of the
/// lower-cased input — a token with attached punctuation never matches.
/// Only the detector sees a cleaned (punctuation-stripped) copy.
///
/// A detector failure propagates as an error for the result assembler to
/// capture; it is never fatal to the process.
pub fn classify(
    text: &str,
    lexicon: &Lexicon,
    detector: &dyn LanguageDetector,
) -> MtResult<Classification> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    if tokens.len() == 1 {
        let word = tokens[0];
        let classification = if lexicon.has_french(word) {
            Classification {
                language: Some(FRENCH.to_string()),
                route: Route::DirectForward,
            }
        } else if lexicon.has_shimaore(word) {
            Classification {
                language: Some(SHIMAORE.to_string()),
                route: Route::DirectReverse,
            }
        } else {
            Classification {
                language: None,
                route: Route::WordNotFound,
            }
        };
        return Ok(classification);
    }

    // French side first: the tie-break for code-mixed sentences.
    if tokens.iter().any(|w| lexicon.has_french(w)) {
        return Ok(Classification {
            language: Some(FRENCH.to_string()),
            route: Route::PivotFromFrench,
        });
    }
    if tokens.iter().any(|w| lexicon.has_shimaore(w)) {
        return Ok(Classification {
            language: Some(SHIMAORE.to_string()),
            route: Route::PivotFromShimaore,
        });
    }

    let cleaned = clean_text(&lowered);
    let detected = detector.detect(&cleaned)?;
    tracing::debug!(detected = %detected, "no lexicon signal, detector consulted");

    let route = match detected.as_str() {
        FRENCH => Route::PivotFromFrench,
        SHIMAORE => Route::PivotFromShimaore,
        _ => Route::Unsupported,
    };
    Ok(Classification {
        language: Some(detected),
        route,
    })
}
