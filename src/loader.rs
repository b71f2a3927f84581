//! Document loading from various sources.
//!
//! Handles loading JSON:API documents from files, strings, and HTTP URLs.
//! Parsing into [`Document`] is where shape violations (missing `type`/`id`,
//! unexpected `data` shapes) surface; the resolution engine itself performs
//! no validation.

use std::path::Path;

use crate::error::DeserializeError;
use crate::types::Document;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Load a document from a file path.
///
/// # Errors
///
/// Returns `DeserializeError::FileNotFound` if the file doesn't exist,
/// or `DeserializeError::InvalidDocument` if the contents don't parse as a
/// JSON:API document.
pub fn load_document(path: &Path) -> Result<Document, DeserializeError> {
    if !path.exists() {
        return Err(DeserializeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| DeserializeError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_document_str(&content)
}

/// Load a document from a JSON string.
///
/// # Errors
///
/// Returns `DeserializeError::InvalidDocument` if the string isn't a valid
/// JSON:API document.
pub fn load_document_str(content: &str) -> Result<Document, DeserializeError> {
    serde_json::from_str(content).map_err(|source| DeserializeError::InvalidDocument { source })
}

/// Load a document from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default).
///
/// # Errors
///
/// Returns `DeserializeError::NetworkError` if the request fails,
/// or `DeserializeError::InvalidDocument` if the response body isn't a valid
/// JSON:API document.
#[cfg(feature = "remote")]
pub async fn load_document_url(url: &str) -> Result<Document, DeserializeError> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|source| DeserializeError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| DeserializeError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    // Check for HTTP errors before parsing
    let response = response
        .error_for_status()
        .map_err(|source| DeserializeError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    let body = response
        .text()
        .await
        .map_err(|source| DeserializeError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    load_document_str(&body)
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a document from a file path or URL, dispatching on the source shape.
///
/// Without the `remote` feature every source is treated as a file path.
pub async fn load_document_auto(source: &str) -> Result<Document, DeserializeError> {
    #[cfg(feature = "remote")]
    if is_url(source) {
        return load_document_url(source).await;
    }

    load_document(Path::new(source))
}
