use crate::engine::{EngineOptions, run};
use crate::error::FindError;
use crate::results::Results;
use crate::traits::{Matcher, Source};

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a walk.
///
/// Created via [`treefind::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) to execute.
///
/// # Example
///
/// ```rust,no_run
/// use treefind::{FsSource, Filters, SizeFilter};
///
/// let filters = Filters { size: Some(SizeFilter::greater(15)), ..Filters::default() };
/// let results = treefind::search()
///     .source(FsSource::new("/tmp"))
///     .with_matcher(filters)
///     .collect_errors(true)
///     .run()?;
/// # Ok::<(), treefind::FindError>(())
/// ```
#[derive(Default)]
pub struct SearchBuilder {
    source:         Option<Box<dyn Source>>,
    matcher:        Option<Box<dyn Matcher>>,
    collect_errors: bool,
}

impl SearchBuilder {
    /// Set the source to walk.
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Some(Box::new(s));
        self
    }

    /// Set the matcher applied to non-directory entries. Without one, every
    /// non-directory entry matches.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    /// Keep recoverable errors in [`Results::errors`].
    ///
    /// Disabled by default. Errors are logged whether or not they are kept.
    pub fn collect_errors(mut self, yes: bool) -> Self {
        self.collect_errors = yes;
        self
    }

    /// Execute the walk and return results.
    ///
    /// # Errors
    ///
    /// Returns `Err` only when no source was provided. Per-entry failures
    /// during the walk are never fatal.
    pub fn run(self) -> Result<Results, FindError> {
        let source = self
            .source
            .ok_or_else(|| FindError::Walk("no source provided".into()))?;

        // Default matcher: match everything
        let matcher: Box<dyn Matcher> = match self.matcher {
            Some(m) => m,
            None    => Box::new(AllMatcher),
        };

        Ok(run(EngineOptions {
            source,
            matcher,
            collect_errors: self.collect_errors,
        }))
    }
}

/// Matches every entry. Used when no matcher is specified.
struct AllMatcher;

impl Matcher for AllMatcher {
    fn is_match(&self, _entry: &crate::entry::Entry) -> bool {
        true
    }
}
