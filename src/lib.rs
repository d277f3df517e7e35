//! # treefind
//!
//! Breadth-first file finder. Walks a directory tree, keeps the
//! non-directory entries whose metadata satisfies every requested filter
//! (inode, exact name, size comparison, hard-link count), and can hand the
//! matches to an external program as its argument vector.
//!
//! The walk is split into a [`Source`] that yields entries in breadth-first
//! order and a [`Matcher`] that decides which of them to keep. [`FsSource`]
//! walks the local filesystem; [`Filters`] is the matcher built from the
//! command line.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use treefind::{Query, SizeFilter};
//!
//! let mut query = Query::new("/var/log");
//! query.filters.size = Some(SizeFilter::greater(1 << 20));
//!
//! for path in treefind::walk(&query).paths {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! # Custom Sources
//!
//! Anything that can produce [`Entry`] values in order can be searched:
//!
//! ```rust
//! use treefind::{Entry, EntryKind, Filters, FindError, Source};
//!
//! struct VecSource(Vec<(&'static str, u64)>);
//!
//! impl Source for VecSource {
//!     fn walk(&self) -> Box<dyn Iterator<Item = Result<Entry, FindError>> + '_> {
//!         Box::new(self.0.iter().map(|&(name, size)| Ok(Entry {
//!             path: name.into(), name: name.into(), kind: EntryKind::File,
//!             depth: 1, ino: 0, size, nlinks: 1,
//!         })))
//!     }
//! }
//!
//! let filters = Filters { name: Some("report.txt".into()), ..Filters::default() };
//! let results = treefind::search()
//!     .source(VecSource(vec![("invoice.txt", 10), ("report.txt", 20)]))
//!     .with_matcher(filters)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(results.paths, vec![std::path::PathBuf::from("report.txt")]);
//! ```

#![deny(unsafe_code)]

pub mod cli;
pub mod logging;
pub mod process;

mod builder;
mod engine;
mod entry;
mod error;
mod query;
mod results;
mod source;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use entry::{Entry, EntryKind};
pub use error::FindError;
pub use process::{ProcessOutcome, run_and_report};
pub use query::{Filters, Query, SizeFilter};
pub use results::{Results, ScanStats};
pub use source::FsSource;
pub use traits::{Matcher, Source};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] to configure and run a search.
pub fn search() -> SearchBuilder {
    SearchBuilder::default()
}

/// Walk `query.root` on the local filesystem with `query.filters`.
///
/// Unreadable directories and entries are logged, kept in
/// [`Results::errors`], and skipped.
pub fn walk(query: &Query) -> Results {
    engine::run(engine::EngineOptions {
        source:         Box::new(FsSource::new(query.root.clone())),
        matcher:        Box::new(query.filters.clone()),
        collect_errors: true,
    })
}
