//! Two-hop pivot translation orchestration
//!
//! No direct model exists between French and Shimaore, so multi-word
//! requests are routed through English: substitute known lexicon words
//! first, translate into the pivot, then translate out of it. Both hops
//! must succeed; there is no partial output and no retry — a failed hop
//! fails the whole call.

use crate::error::{MtError, MtResult};
use crate::lexicon::Lexicon;
use crate::substitution::substitute;
use crate::translator::MachineTranslator;
use crate::{FRENCH, PIVOT, SHIMAORE};
use std::sync::Arc;
use std::time::Duration;

/// Sequences the two directional translation calls for each route.
///
/// Holds the four directional capability handles, loaded once at startup
/// and shared read-only across requests. Each hop runs under a bounded
/// timeout so a stuck inference call surfaces as a translation error
/// instead of hanging the request.
#[derive(Clone)]
pub struct PivotTranslator {
    french_to_pivot: Arc<dyn MachineTranslator>,
    pivot_to_shimaore: Arc<dyn MachineTranslator>,
    shimaore_to_pivot: Arc<dyn MachineTranslator>,
    pivot_to_french: Arc<dyn MachineTranslator>,
    lexicon: Arc<Lexicon>,
    hop_timeout: Duration,
}

impl PivotTranslator {
    /// Build an orchestrator with explicit directional handles.
    pub fn new(
        french_to_pivot: Arc<dyn MachineTranslator>,
        pivot_to_shimaore: Arc<dyn MachineTranslator>,
        shimaore_to_pivot: Arc<dyn MachineTranslator>,
        pivot_to_french: Arc<dyn MachineTranslator>,
        lexicon: Arc<Lexicon>,
        hop_timeout: Duration,
    ) -> Self {
        PivotTranslator {
            french_to_pivot,
            pivot_to_shimaore,
            shimaore_to_pivot,
            pivot_to_french,
            lexicon,
            hop_timeout,
        }
    }

    /// Build an orchestrator where one provider serves all four
    /// directions — the production shape, with a single inference server
    /// multiplexing the directional models.
    pub fn uniform(
        provider: Arc<dyn MachineTranslator>,
        lexicon: Arc<Lexicon>,
        hop_timeout: Duration,
    ) -> Self {
        Self::new(
            provider.clone(),
            provider.clone(),
            provider.clone(),
            provider,
            lexicon,
            hop_timeout,
        )
    }

    async fn hop(
        &self,
        capability: &Arc<dyn MachineTranslator>,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<String> {
        tokio::time::timeout(self.hop_timeout, capability.translate(text, source_lang, target_lang))
            .await
            .map_err(|_| {
                MtError::TranslationError(format!(
                    "{} → {} hop timed out after {}s",
                    source_lang,
                    target_lang,
                    self.hop_timeout.as_secs()
                ))
            })?
    }

    /// French sentence → Shimaore sentence via English.
    pub async fn french_to_shimaore(&self, text: &str) -> MtResult<String> {
        let (prepared, replaced) = substitute(text, self.lexicon.forward());
        tracing::debug!(replaced, "prepared French input for pivot");
        let english = self.hop(&self.french_to_pivot, &prepared, FRENCH, PIVOT).await?;
        self.hop(&self.pivot_to_shimaore, &english, PIVOT, SHIMAORE)
            .await
    }

    /// Shimaore sentence → French sentence via English.
    pub async fn shimaore_to_french(&self, text: &str) -> MtResult<String> {
        let (prepared, replaced) = substitute(text, self.lexicon.reverse());
        tracing::debug!(replaced, "prepared Shimaore input for pivot");
        let english = self.hop(&self.shimaore_to_pivot, &prepared, SHIMAORE, PIVOT).await?;
        self.hop(&self.pivot_to_french, &english, PIVOT, FRENCH)
            .await
    }
}
