use std::path::PathBuf;
use thiserror::Error;

/// Failure while fetching or pattern-matching one of the two documents.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("can't get default_filename.")]
    MissingDefaultFilename,

    #[error("no metadata path found in the view page")]
    MissingMetadataPath,

    #[error("no video information was extracted.")]
    NoVideoInfo,

    #[error("no playable stream found in the metadata document")]
    NoStream,

    #[error("extraction failed")]
    Unspecified,
}

/// Failure after extraction succeeded.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("file already exists: {}. remove it or use `overwrite`", .0.display())]
    FileExists(PathBuf),

    #[error("{0} could not be run. check the binary path.")]
    ToolUnavailable(String),

    #[error("failed to start {0}")]
    Spawn(String),

    #[error("download may be incomplete. rtmpdump exited with code {code}")]
    Incomplete { code: i32 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("download failed")]
    Unspecified,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Download(#[from] DownloadError),
}

pub type Result<T> = std::result::Result<T, Error>;
