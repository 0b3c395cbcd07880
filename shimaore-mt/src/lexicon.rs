//! Bidirectional French ↔ Shimaore word lexicon
//!
//! The lexicon is built once at startup from the two-column dataset and is
//! read-only for the lifetime of the process. It serves two purposes:
//! direct lookup for single-word requests, and a language signal for the
//! classifier (a sentence containing a known French word is French-leaning).

use std::collections::HashMap;

/// Immutable word-to-word mapping in both directions.
///
/// Keys and values are lower-cased at construction. When the dataset
/// contains the same key twice, the last row wins — both maps are built
/// from the full row sequence, so the forward and reverse sides resolve
/// duplicates independently.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// French word → Shimaore word
    forward: HashMap<String, String>,
    /// Shimaore word → French word
    reverse: HashMap<String, String>,
}

impl Lexicon {
    /// Build a lexicon from (french, shimaore) rows.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let lexicon = Lexicon::from_rows(vec![
    ///     ("Bonjour".to_string(), "Kwezi".to_string()),
    /// ]);
    /// assert_eq!(lexicon.french_to_shimaore("bonjour"), Some("kwezi"));
    /// ```
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        for (french, shimaore) in rows {
            let french = french.to_lowercase();
            let shimaore = shimaore.to_lowercase();
            forward.insert(french.clone(), shimaore.clone());
            reverse.insert(shimaore, french);
        }
        Lexicon { forward, reverse }
    }

    /// Look up the Shimaore word for a French token.
    pub fn french_to_shimaore(&self, token: &str) -> Option<&str> {
        self.forward.get(token).map(String::as_str)
    }

    /// Look up the French word for a Shimaore token.
    pub fn shimaore_to_french(&self, token: &str) -> Option<&str> {
        self.reverse.get(token).map(String::as_str)
    }

    /// Whether the token is a known French word.
    pub fn has_french(&self, token: &str) -> bool {
        self.forward.contains_key(token)
    }

    /// Whether the token is a known Shimaore word.
    pub fn has_shimaore(&self, token: &str) -> bool {
        self.reverse.contains_key(token)
    }

    /// The French → Shimaore map.
    pub fn forward(&self) -> &HashMap<String, String> {
        &self.forward
    }

    /// The Shimaore → French map.
    pub fn reverse(&self) -> &HashMap<String, String> {
        &self.reverse
    }

    /// Number of forward entries.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
