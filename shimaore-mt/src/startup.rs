//! Startup phase and initialization state
//!
//! All capabilities — lexicon, detector, the four translation handles —
//! are assembled in one explicit startup phase that either produces a
//! ready `TranslationPipeline` or a startup error. The request path never
//! initializes anything lazily.
//!
//! Readiness is a small state machine, `Uninitialized → Loading → Ready |
//! Failed`, transitioned exactly once per edge by the single startup
//! writer and read concurrently by request handlers.

use crate::config::AppConfig;
use crate::dataset;
use crate::detector::WhatlangDetector;
use crate::error::{MtError, MtResult};
use crate::opus_mt::OpusMtProvider;
use crate::pipeline::TranslationPipeline;
use crate::pivot::PivotTranslator;
use crate::provision;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU8, Ordering};

/// Initialization state of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Loading,
    Ready,
    Failed(String),
}

impl std::fmt::Display for InitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitState::Uninitialized => write!(f, "uninitialized"),
            InitState::Loading => write!(f, "loading"),
            InitState::Ready => write!(f, "ready"),
            InitState::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Shared readiness gauge: the current `InitState` plus a 0–100 load
/// progress percentage (dataset download, then lexicon build).
#[derive(Debug)]
pub struct Startup {
    state: RwLock<InitState>,
    progress: AtomicU8,
}

impl Startup {
    pub fn new() -> Self {
        Startup {
            state: RwLock::new(InitState::Uninitialized),
            progress: AtomicU8::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> InitState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn progress(&self) -> u8 {
        self.progress.load(Ordering::Relaxed)
    }

    pub fn set_progress(&self, percent: u8) {
        self.progress.store(percent.min(100), Ordering::Relaxed);
    }

    /// `Uninitialized → Loading`.
    pub fn begin_loading(&self) -> MtResult<()> {
        self.transition(InitState::Loading, |s| *s == InitState::Uninitialized)
    }

    /// `Loading → Ready`. Also pins progress to 100.
    pub fn mark_ready(&self) -> MtResult<()> {
        self.transition(InitState::Ready, |s| *s == InitState::Loading)?;
        self.set_progress(100);
        Ok(())
    }

    /// `Loading → Failed(reason)`.
    pub fn mark_failed(&self, reason: &str) -> MtResult<()> {
        self.transition(InitState::Failed(reason.to_string()), |s| {
            *s == InitState::Loading
        })
    }

    fn transition(
        &self,
        next: InitState,
        allowed_from: impl Fn(&InitState) -> bool,
    ) -> MtResult<()> {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !allowed_from(&state) {
            return Err(MtError::InvalidState(format!(
                "cannot transition from {:?} to {:?}",
                *state, next
            )));
        }
        *state = next;
        Ok(())
    }
}

impl Default for Startup {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the full startup phase: provision the dataset, build the lexicon,
/// the detector, and the four translation handles, and return a ready
/// pipeline. On any failure the gauge lands in `Failed` with the reason.
pub async fn initialize(config: &AppConfig, startup: &Startup) -> MtResult<TranslationPipeline> {
    startup.begin_loading()?;
    match build_pipeline(config, startup).await {
        Ok(pipeline) => {
            startup.mark_ready()?;
            tracing::info!("translation pipeline ready");
            Ok(pipeline)
        }
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            let _ = startup.mark_failed(&err.to_string());
            Err(err)
        }
    }
}

async fn build_pipeline(config: &AppConfig, startup: &Startup) -> MtResult<TranslationPipeline> {
    // Download progress covers the first 90%; the lexicon build is fast.
    provision::ensure_dataset(&config.dataset_path, config.dataset_url.as_deref(), |p| {
        startup.set_progress((u16::from(p) * 90 / 100) as u8)
    })
    .await?;

    let lexicon = Arc::new(dataset::load_lexicon(&config.dataset_path)?);
    startup.set_progress(95);

    let endpoint = config.endpoint.as_ref().ok_or_else(|| {
        MtError::ConfigError("no translation endpoint configured (OPUS_MT_ENDPOINT)".to_string())
    })?;
    let provider = Arc::new(OpusMtProvider::new(endpoint.clone(), config.hop_timeout)?);
    let pivot = PivotTranslator::uniform(provider, lexicon.clone(), config.hop_timeout);

    let detector = Arc::new(WhatlangDetector::new());
    Ok(TranslationPipeline::new(lexicon, detector, pivot))
}
