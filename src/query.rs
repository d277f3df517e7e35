use std::cmp::Ordering;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::entry::Entry;
use crate::traits::Matcher;

/// A parsed search request: where to start, what to keep, and what to run
/// on the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub root: PathBuf,
    pub filters: Filters,
    pub exec: Option<PathBuf>,
}

impl Query {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            filters: Filters::default(),
            exec: None,
        }
    }
}

/// Independent optional predicates. `None` means "not checked".
///
/// An entry matches when every predicate that is set holds; with nothing set
/// every entry matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub inode: Option<u64>,
    pub name: Option<OsString>,
    pub size: Option<SizeFilter>,
    pub nlinks: Option<u64>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.inode.is_none() && self.name.is_none() && self.size.is_none() && self.nlinks.is_none()
    }

    /// Evaluate every active predicate against `entry`.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.inode.map_or(true, |ino| entry.ino == ino)
            && self.name.as_ref().map_or(true, |name| entry.name == *name)
            && self.size.map_or(true, |size| size.matches(entry.size))
            && self.nlinks.map_or(true, |n| entry.nlinks == n)
    }
}

impl Matcher for Filters {
    fn is_match(&self, entry: &Entry) -> bool {
        self.matches(entry)
    }
}

/// `-size [-=+]N`: the entry's size must compare to `bytes` as `ordering`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFilter {
    pub ordering: Ordering,
    pub bytes: u64,
}

impl SizeFilter {
    pub fn less(bytes: u64) -> Self {
        Self { ordering: Ordering::Less, bytes }
    }

    pub fn equal(bytes: u64) -> Self {
        Self { ordering: Ordering::Equal, bytes }
    }

    pub fn greater(bytes: u64) -> Self {
        Self { ordering: Ordering::Greater, bytes }
    }

    pub fn matches(&self, size: u64) -> bool {
        size.cmp(&self.bytes) == self.ordering
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;

    fn file(name: &str, ino: u64, size: u64, nlinks: u64) -> Entry {
        Entry {
            path: PathBuf::from("root").join(name),
            name: name.into(),
            kind: EntryKind::File,
            depth: 1,
            ino,
            size,
            nlinks,
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let filters = Filters::default();
        assert!(filters.is_empty());
        assert!(filters.matches(&file("a", 1, 0, 1)));
        assert!(filters.matches(&file("b", 99, 1 << 40, 7)));
    }

    #[test]
    fn size_boundaries() {
        assert!(SizeFilter::less(10).matches(9));
        assert!(!SizeFilter::less(10).matches(10));
        assert!(!SizeFilter::less(10).matches(11));

        assert!(!SizeFilter::equal(10).matches(9));
        assert!(SizeFilter::equal(10).matches(10));
        assert!(!SizeFilter::equal(10).matches(11));

        assert!(!SizeFilter::greater(10).matches(9));
        assert!(!SizeFilter::greater(10).matches(10));
        assert!(SizeFilter::greater(10).matches(11));
    }

    #[test]
    fn name_compares_base_name_only() {
        let filters = Filters {
            name: Some("a.txt".into()),
            ..Filters::default()
        };
        assert!(filters.matches(&file("a.txt", 1, 0, 1)));
        assert!(!filters.matches(&file("b.txt", 1, 0, 1)));

        let by_path = Filters {
            name: Some("root/a.txt".into()),
            ..Filters::default()
        };
        assert!(!by_path.matches(&file("a.txt", 1, 0, 1)));
    }

    #[test]
    fn inode_and_nlinks_alone() {
        let by_inode = Filters {
            inode: Some(42),
            ..Filters::default()
        };
        assert!(by_inode.matches(&file("a", 42, 0, 1)));
        assert!(!by_inode.matches(&file("a", 43, 0, 1)));

        let by_links = Filters {
            nlinks: Some(2),
            ..Filters::default()
        };
        assert!(by_links.matches(&file("a", 1, 0, 2)));
        assert!(!by_links.matches(&file("a", 1, 0, 1)));
    }

    #[test]
    fn active_filters_are_combined_with_and() {
        let filters = Filters {
            inode: Some(7),
            name: Some("x".into()),
            size: Some(SizeFilter::greater(15)),
            nlinks: Some(2),
        };
        assert!(filters.matches(&file("x", 7, 20, 2)));

        // Each single mismatch is enough to reject.
        assert!(!filters.matches(&file("x", 8, 20, 2)));
        assert!(!filters.matches(&file("y", 7, 20, 2)));
        assert!(!filters.matches(&file("x", 7, 15, 2)));
        assert!(!filters.matches(&file("x", 7, 20, 1)));
    }
}
