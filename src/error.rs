use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failure to produce a metrics snapshot from the file on disk.
///
/// Every variant is reported in-band to the scraper, never as a 5xx.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {} as UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl SnapshotError {
    pub fn path(&self) -> &PathBuf {
        match self {
            SnapshotError::Read { path, .. } | SnapshotError::Decode { path, .. } => path,
        }
    }
}
