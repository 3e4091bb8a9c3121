use thiserror::Error;

/// Failures that degrade the map locally. Nothing here tears down a running
/// view: a failed fetch leaves an empty registry, a rejected record is
/// skipped, and lookup misses are plain `None`s.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to parse marker data: {0}")]
    DataFetch(#[from] serde_json::Error),

    #[error("unknown marker group {group:?} for {title:?}")]
    UnknownGroup { group: String, title: String },
}
