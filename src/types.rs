use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

/// A single file selected for the digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The path as encountered during the walk.
    pub path: PathBuf,
    /// The path relative to the scanned root, as shown in digest headers.
    pub relative: PathBuf,
    /// File size in bytes.
    pub size: u64,
    /// Creation time, falling back to the modification time on filesystems
    /// that do not record one.
    pub created: SystemTime,
    /// Last modification time.
    pub modified: SystemTime,
}

/// The outcome of a digest run.
#[derive(Debug, Serialize, Deserialize)]
pub struct DigestReport {
    /// Path of the digest file that was written.
    pub output: PathBuf,
    /// Whether a tree overview was included at the top of the digest.
    pub tree_included: bool,
    /// The files written into the digest, in digest order.
    pub files: Vec<FileEntry>,
    /// Non-fatal problems encountered during the run.
    ///
    /// The library never prints these; callers are expected to surface them
    /// on the error stream.
    pub warnings: Vec<String>,
}
