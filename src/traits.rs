use crate::entry::Entry;
use crate::error::FindError;

/// A source of entries to search through.
///
/// Sources yield every entry they visit, directories included, in the order
/// the engine should report matches. The engine never reorders.
///
/// # Error Handling
///
/// Recoverable errors (unreadable directories, failed stats) should be
/// yielded as `Err(FindError)` and the walk should carry on with whatever is
/// left. The engine logs them and keeps them in [`Results::errors`] when
/// `.collect_errors(true)` is set on the builder.
///
/// [`Results::errors`]: crate::Results::errors
///
/// # Example
///
/// ```rust
/// use treefind::{Entry, EntryKind, FindError, Source};
///
/// struct VecSource(Vec<&'static str>);
///
/// impl Source for VecSource {
///     fn walk(&self) -> Box<dyn Iterator<Item = Result<Entry, FindError>> + '_> {
///         Box::new(self.0.iter().map(|name| Ok(Entry {
///             path: name.into(), name: name.into(), kind: EntryKind::File,
///             depth: 1, ino: 0, size: 0, nlinks: 1,
///         })))
///     }
/// }
/// ```
pub trait Source {
    /// Traverse the source and yield entries.
    fn walk(&self) -> Box<dyn Iterator<Item = Result<Entry, FindError>> + '_>;
}

/// Determines whether a non-directory entry is a match.
///
/// Must be pure: the same entry always gets the same answer.
pub trait Matcher {
    /// Returns `true` if this entry should be included in results.
    fn is_match(&self, entry: &Entry) -> bool;
}
