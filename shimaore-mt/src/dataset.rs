//! Lexicon dataset loading
//!
//! The lexicon ships as a two-column CSV with headers `text` (French) and
//! `target` (Shimaore), read once during startup. A missing file or a row
//! that does not fit the schema is a fatal startup condition — malformed
//! data is never handled per request.

use crate::error::{MtError, MtResult};
use crate::lexicon::Lexicon;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct LexiconRow {
    text: String,
    target: String,
}

/// Read the raw (french, shimaore) rows of the dataset, in file order.
pub fn load_lexicon_rows(path: &Path) -> MtResult<Vec<(String, String)>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        MtError::DatasetError(format!("cannot open {}: {}", path.display(), e))
    })?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<LexiconRow>() {
        let row = record.map_err(|e| {
            MtError::DatasetError(format!("malformed row in {}: {}", path.display(), e))
        })?;
        rows.push((row.text, row.target));
    }

    if rows.is_empty() {
        tracing::warn!(path = %path.display(), "lexicon dataset contains no rows");
    }
    Ok(rows)
}

/// Load the dataset and build the bidirectional lexicon from it.
pub fn load_lexicon(path: &Path) -> MtResult<Lexicon> {
    let rows = load_lexicon_rows(path)?;
    let lexicon = Lexicon::from_rows(rows);
    tracing::info!(
        path = %path.display(),
        entries = lexicon.len(),
        "lexicon loaded"
    );
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_rows_in_file_order() {
        let file = write_dataset("text,target\nbonjour,kwezi\nmerci,marahaba\n");
        let rows = load_lexicon_rows(file.path()).unwrap();
        assert_eq!(
            rows,
            vec![
                ("bonjour".to_string(), "kwezi".to_string()),
                ("merci".to_string(), "marahaba".to_string()),
            ]
        );
    }

    #[test]
    fn test_load_lexicon_applies_last_write_wins() {
        let file = write_dataset("text,target\nbonjour,kwezi\nbonjour,jeje\n");
        let lexicon = load_lexicon(file.path()).unwrap();
        assert_eq!(lexicon.french_to_shimaore("bonjour"), Some("jeje"));
    }

    #[test]
    fn test_load_lexicon_lowercases_entries() {
        let file = write_dataset("text,target\nBonjour,KWEZI\n");
        let lexicon = load_lexicon(file.path()).unwrap();
        assert_eq!(lexicon.french_to_shimaore("bonjour"), Some("kwezi"));
    }

    #[test]
    fn test_missing_file_is_a_dataset_error() {
        let result = load_lexicon_rows(Path::new("/nonexistent/lexicon.csv"));
        assert!(matches!(result, Err(MtError::DatasetError(_))));
    }

    #[test]
    fn test_missing_column_is_a_dataset_error() {
        let file = write_dataset("text\nbonjour\n");
        let result = load_lexicon_rows(file.path());
        assert!(matches!(result, Err(MtError::DatasetError(_))));
    }

    #[test]
    fn test_empty_dataset_is_allowed() {
        let file = write_dataset("text,target\n");
        let lexicon = load_lexicon(file.path()).unwrap();
        assert!(lexicon.is_empty());
    }
}
