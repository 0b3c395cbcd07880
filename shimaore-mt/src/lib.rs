//! French ↔ Shimaore translation routing with an English pivot
//!
//! This crate decides, per request, whether a deterministic dictionary
//! lookup answers a translation or whether a two-hop statistical
//! translation through English is required, and orchestrates the hops.
//!
//! The pieces, leaves first: `Lexicon` (an immutable bidirectional
//! word-to-word mapping loaded once at startup), `substitute` (token-level
//! rewriting through one side of the lexicon), `classify` (lexicon-first
//! language classification with a statistical detector fallback),
//! `PivotTranslator` (the fr→en→sw / sw→en→fr hop sequencing), and
//! `TranslationPipeline` (drives the above and assembles the outcome).
//!
//! # Example
//!
//! ```ignore
//! use shimaore_mt::{
//!     Lexicon, MockDetector, MockMode, MockTranslator, PivotTranslator,
//!     TranslationPipeline,
//! };
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let lexicon = Arc::new(Lexicon::from_rows(vec![
//!         ("bonjour".to_string(), "kwezi".to_string()),
//!     ]));
//!     let pivot = PivotTranslator::uniform(
//!         Arc::new(MockTranslator::new(MockMode::Uppercase)),
//!         lexicon.clone(),
//!         Duration::from_secs(5),
//!     );
//!     let pipeline = TranslationPipeline::new(
//!         lexicon,
//!         Arc::new(MockDetector::returning("fr")),
//!         pivot,
//!     );
//!
//!     let outcome = pipeline.translate_input("bonjour").await;
//!     assert_eq!(outcome.translation.as_deref(), Some("kwezi"));
//! }
//! ```

pub mod classify;
pub mod config;
pub mod dataset;
pub mod detector;
pub mod error;
pub mod lexicon;
pub mod mock;
pub mod opus_mt;
pub mod pipeline;
pub mod pivot;
pub mod provision;
pub mod startup;
pub mod substitution;
pub mod translator;

// Integration tests (only available during testing)
#[cfg(test)]
mod integration_tests;

// Re-export main types for convenient access
pub use classify::{Classification, Route, classify, clean_text};
pub use config::AppConfig;
pub use detector::{LanguageDetector, WhatlangDetector};
pub use error::{MtError, MtResult};
pub use lexicon::Lexicon;
pub use mock::{MockDetector, MockMode, MockTranslator};
pub use opus_mt::OpusMtProvider;
pub use pipeline::{Status, TranslationOutcome, TranslationPipeline};
pub use pivot::PivotTranslator;
pub use startup::{InitState, Startup, initialize};
pub use substitution::substitute;
pub use translator::MachineTranslator;

/// Code for the majority language (French).
pub const FRENCH: &str = "fr";
/// Code for the target vernacular. Shimaore has no two-letter ISO code;
/// the statistical detector classifies it as Swahili, and the rest of the
/// system follows that convention.
pub const SHIMAORE: &str = "sw";
/// Code for the pivot language (English). Never surfaces in
/// `detected_language`.
pub const PIVOT: &str = "en";
