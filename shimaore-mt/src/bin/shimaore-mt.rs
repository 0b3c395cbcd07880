use clap::{Arg, Command};
use shimaore_mt::{
    AppConfig, LanguageDetector, MachineTranslator, MockDetector, MockMode, MockTranslator,
    OpusMtProvider, PivotTranslator, TranslationPipeline, WhatlangDetector, dataset, provision,
};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("shimaore-mt")
        .version("0.1.0")
        .about("French ↔ Shimaore translation CLI with an English pivot")
        .arg(
            Arg::new("sentence")
                .help("Sentence or single word to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("dataset")
                .long("dataset")
                .short('d')
                .help("Path to the lexicon CSV (default: data/lexicon.csv)"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the uppercase mock translator instead of the OPUS-MT endpoint")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("detector-code")
                .long("detector-code")
                .help("Force the statistical detector to return this language code"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show routing detail")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let sentence = matches.get_one::<String>("sentence").unwrap();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let config = AppConfig::from_env()?;
    let dataset_path = matches
        .get_one::<String>("dataset")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.dataset_path.clone());

    // Validation mirrors the web layer: reject before the pipeline runs.
    let trimmed = sentence.trim();
    if trimmed.is_empty() {
        eprintln!("❌ The sentence is empty");
        return Err("empty sentence".into());
    }
    if trimmed.chars().count() > config.max_sentence_chars {
        eprintln!(
            "❌ The sentence exceeds {} characters",
            config.max_sentence_chars
        );
        return Err("sentence too long".into());
    }

    provision::ensure_dataset(&dataset_path, config.dataset_url.as_deref(), |_| {}).await?;
    let lexicon = Arc::new(dataset::load_lexicon(&dataset_path)?);

    if verbose {
        println!("📖 Lexicon: {} entries from {}", lexicon.len(), dataset_path.display());
    }

    let translator: Arc<dyn MachineTranslator> = if use_mock {
        Arc::new(MockTranslator::new(MockMode::Uppercase))
    } else {
        if env::var("OPUS_MT_ENDPOINT").is_err() {
            eprintln!("❌ OPUS_MT_ENDPOINT environment variable not set");
            eprintln!("   Set it with: export OPUS_MT_ENDPOINT=http://localhost:8000");
            eprintln!("   Or use --mock to use the mock translator");
            return Err("missing endpoint".into());
        }
        Arc::new(OpusMtProvider::from_env()?)
    };

    let detector: Arc<dyn LanguageDetector> = match matches.get_one::<String>("detector-code") {
        Some(code) => Arc::new(MockDetector::returning(code)),
        None => Arc::new(WhatlangDetector::new()),
    };

    if verbose {
        println!(
            "🌍 Translator: {} / Detector: {}",
            translator.provider_name(),
            detector.detector_name()
        );
        println!();
    }

    let pivot = PivotTranslator::uniform(translator, lexicon.clone(), config.hop_timeout);
    let pipeline = TranslationPipeline::new(lexicon, detector, pivot);

    let outcome = pipeline.translate_input(sentence).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
