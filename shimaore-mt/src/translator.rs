//! Machine translation capability trait
//!
//! The pipeline never talks to a translation backend directly; it holds
//! trait objects so the orchestration logic can be exercised with
//! deterministic stubs. Production wires in `OpusMtProvider`, tests wire
//! in `MockTranslator`.

use crate::error::MtResult;
use async_trait::async_trait;

/// Directional text translation between two language codes.
///
/// Implementations are called once per hop of the pivot sequence; there
/// is no batching because every request carries a single sentence.
///
/// # Example
///
/// ```ignore
/// let provider = OpusMtProvider::from_env()?;
/// let english = provider.translate("bonjour le monde", "fr", "en").await?;
/// ```
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate `text` from `source_lang` to `target_lang`.
    ///
    /// May take arbitrarily long (model inference latency); callers bound
    /// it with a timeout. A failure applies to the whole call — no
    /// partial output is ever returned.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<String>;

    /// Name of this provider, for logging.
    fn provider_name(&self) -> &str;
}
