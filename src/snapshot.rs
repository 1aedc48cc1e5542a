//! Metrics snapshot reader
//!
//! The snapshot is written by an external simulation process; this module
//! only reads it back, once per scrape.

use std::path::Path;

use crate::error::SnapshotError;

/// The only path served by the exporter
pub const METRICS_PATH: &str = "/metrics";

/// Prometheus text exposition format
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// First line of the body returned when the snapshot cannot be read
pub const ERROR_MARKER: &str = "# exporter_error 1";

/// Read the whole snapshot file.
///
/// The content must be valid UTF-8 but is otherwise returned untouched.
pub async fn read_snapshot(path: &Path) -> Result<Vec<u8>, SnapshotError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let text = String::from_utf8(bytes).map_err(|source| SnapshotError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text.into_bytes())
}

/// Render the in-band error body: the marker line, then the error as a comment.
pub fn error_body(err: &SnapshotError) -> String {
    // Keep the description on one comment line.
    let description = err.to_string().replace(['\r', '\n'], " ");
    format!("{}\n# {}\n", ERROR_MARKER, description)
}
