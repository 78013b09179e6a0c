use std::path::PathBuf;

use thiserror::Error;

/// Fatal scan-level failures.
///
/// Only problems with the root path itself abort a scan. Everything below
/// the root (unreadable entries, undecodable file contents) degrades with a
/// stderr warning instead and never surfaces as an error.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The caller passed an empty root path. Rejected before any traversal.
    #[error("scan root path is empty")]
    InvalidInput,

    /// The root path does not exist.
    #[error("scan root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("scan root is not a directory: {}", .0.display())]
    RootNotADirectory(PathBuf),

    /// The root path could not be read (permissions, I/O failure).
    #[error("scan root is not readable: {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
