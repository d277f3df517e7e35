use std::time::Instant;

use tracing::{debug, warn};

use crate::results::{Results, ScanStats};
use crate::traits::{Matcher, Source};

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub source:         Box<dyn Source>,
    pub matcher:        Box<dyn Matcher>,
    pub collect_errors: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Drain the source, testing every non-directory against the matcher.
///
/// Sequential by construction: matches are recorded in exactly the order the
/// source yields them. Errors from the source are logged and skipped; none of
/// them stops the walk.
pub(crate) fn run(opts: EngineOptions) -> Results {
    let mut paths  = Vec::new();
    let mut errors = Vec::new();
    let mut files  = 0;
    let mut dirs   = 0;

    let start = Instant::now();

    for item in opts.source.walk() {
        let entry = match item {
            Ok(e) => e,
            Err(e) => {
                warn!("{e}");
                if opts.collect_errors {
                    errors.push(e);
                }
                continue;
            }
        };

        if entry.is_dir() {
            dirs += 1;
            continue;
        }

        files += 1;
        if opts.matcher.is_match(&entry) {
            paths.push(entry.path);
        }
    }

    let stats = ScanStats {
        files,
        dirs,
        duration: start.elapsed(),
    };

    debug!(
        files = stats.files,
        dirs = stats.dirs,
        matches = paths.len(),
        elapsed_ms = stats.duration.as_millis() as u64,
        "walk finished"
    );

    Results {
        paths,
        stats,
        errors,
    }
}
