//! Dataset provisioning
//!
//! The lexicon CSV is normally shipped alongside the binary. When it is
//! absent and a dataset URL is configured, the startup phase downloads it
//! once, streaming to disk and reporting integer-percent progress so the
//! readiness endpoint can expose how far along the load is.

use crate::error::{MtError, MtResult};
use futures_util::StreamExt;
use std::io::Write;
use std::path::Path;

/// Make sure the dataset exists at `path`, downloading it from `url` if
/// necessary. Returns whether a download happened.
///
/// A missing file with no configured URL is a fatal startup condition.
pub async fn ensure_dataset(
    path: &Path,
    url: Option<&str>,
    progress: impl FnMut(u8) + Send,
) -> MtResult<bool> {
    if path.exists() {
        return Ok(false);
    }

    let Some(url) = url else {
        return Err(MtError::DatasetError(format!(
            "{} is missing and no dataset URL is configured",
            path.display()
        )));
    };

    tracing::info!(%url, dest = %path.display(), "downloading lexicon dataset");
    let bytes = download_dataset(url, path, progress).await?;
    tracing::info!(bytes, "lexicon dataset downloaded");
    Ok(true)
}

/// Stream `url` into `dest`, reporting progress as 0–100.
///
/// The destination is removed again on any failure so a partial file can
/// never be mistaken for a provisioned dataset on the next startup.
pub async fn download_dataset(
    url: &str,
    dest: &Path,
    mut progress: impl FnMut(u8) + Send,
) -> MtResult<u64> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("shimaore-mt/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| MtError::DownloadError(format!("failed to create HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| MtError::DownloadError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(MtError::DownloadError(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let total_size = response.content_length().unwrap_or(0);

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| MtError::DownloadError(format!("cannot create {}: {}", parent.display(), e)))?;
    }
    let mut file = std::fs::File::create(dest)
        .map_err(|e| MtError::DownloadError(format!("cannot create {}: {}", dest.display(), e)))?;

    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                let _ = std::fs::remove_file(dest);
                return Err(MtError::DownloadError(e.to_string()));
            }
        };
        if let Err(e) = file.write_all(&chunk) {
            let _ = std::fs::remove_file(dest);
            return Err(MtError::DownloadError(e.to_string()));
        }

        downloaded += chunk.len() as u64;
        if total_size > 0 {
            progress(((downloaded * 100) / total_size).min(100) as u8);
        }
    }

    if downloaded == 0 {
        let _ = std::fs::remove_file(dest);
        return Err(MtError::DownloadError(
            "empty response where a dataset was expected".to_string(),
        ));
    }

    progress(100);
    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[tokio::test]
    async fn test_existing_dataset_is_not_downloaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"text,target\n").unwrap();

        let downloaded = ensure_dataset(file.path(), None, |_| {}).await.unwrap();
        assert!(!downloaded);
    }

    #[tokio::test]
    async fn test_missing_dataset_without_url_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.csv");

        let result = ensure_dataset(&path, None, |_| {}).await;
        match result {
            Err(MtError::DatasetError(msg)) => assert!(msg.contains("no dataset URL")),
            other => panic!("Expected DatasetError, got {:?}", other),
        }
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored (needs network access)
    async fn test_live_download() {
        if std::env::var("SHIMAORE_MT_DATASET_URL").is_err() {
            eprintln!("Skipping: SHIMAORE_MT_DATASET_URL not set");
            return;
        }
        let url = std::env::var("SHIMAORE_MT_DATASET_URL").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.csv");

        let mut last_progress = 0u8;
        let bytes = download_dataset(&url, &path, |p| last_progress = p)
            .await
            .unwrap();
        assert!(bytes > 0);
        assert_eq!(last_progress, 100);
        assert!(path.exists());
    }
}
