use std::path::PathBuf;
use std::time::Duration;

use crate::error::FindError;

/// The output of a completed walk.
#[derive(Debug)]
pub struct Results {
    /// Full paths of matched entries, in breadth-first visitation order.
    /// Directories never appear here.
    pub paths: Vec<PathBuf>,

    /// Walk statistics.
    pub stats: ScanStats,

    /// Recoverable errors met during the walk (unreadable directories,
    /// failed stats). Only populated if `.collect_errors(true)` was set on
    /// the builder; they are logged either way.
    pub errors: Vec<FindError>,
}

impl Results {
    /// Number of matched entries.
    pub fn matches(&self) -> usize {
        self.paths.len()
    }
}

/// Counts for a completed walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStats {
    /// Non-directory entries seen (matched or not).
    pub files: usize,

    /// Directories seen, excluding the root.
    pub dirs: usize,

    /// Wall-clock time from walk start to completion.
    pub duration: Duration,
}
