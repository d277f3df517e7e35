use std::collections::VecDeque;
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use ignore::{DirEntry, Walk, WalkBuilder};

use crate::entry::{Entry, EntryKind};
use crate::error::FindError;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// FsSource
// ---------------------------------------------------------------------------

/// Breadth-first walk of a directory tree on the local filesystem.
///
/// Every child of every reachable directory is yielded exactly as often as
/// its directory is reached. Metadata comes from `lstat`, so symlinks (to
/// directories too) are yielded as [`EntryKind::Symlink`] and never followed.
/// There is no cycle detection.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Source for FsSource {
    fn walk(&self) -> Box<dyn Iterator<Item = Result<Entry, FindError>> + '_> {
        Box::new(BreadthFirst::new(self.root.clone()))
    }
}

// ---------------------------------------------------------------------------
// BreadthFirst
// ---------------------------------------------------------------------------

/// FIFO of directories still to expand, plus the listing of the one being
/// expanded right now. Only one directory handle is open at a time.
struct BreadthFirst {
    queue:   VecDeque<(PathBuf, usize)>,
    current: Option<(Walk, usize)>,
}

impl BreadthFirst {
    fn new(root: PathBuf) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((root, 0));
        Self { queue, current: None }
    }

    /// Turn one listing item into an entry, enqueueing directories.
    /// Returns `None` for items that are not children (the listed directory
    /// itself).
    fn visit(
        &mut self,
        item: Result<DirEntry, ignore::Error>,
        parent_depth: usize,
    ) -> Option<Result<Entry, FindError>> {
        let dent = match item {
            Ok(d) => d,
            Err(e) => return Some(Err(map_ignore_error(e))),
        };

        // The listed directory comes first; its children follow.
        if dent.depth() == 0 {
            return listed_dir_check(dent).err().map(Err);
        }

        let meta = match dent.metadata() {
            Ok(m) => m,
            Err(e) => return Some(Err(map_ignore_error(e))),
        };

        let entry = Entry {
            path:   dent.path().to_path_buf(),
            name:   dent.file_name().to_os_string(),
            kind:   EntryKind::from_file_type(meta.file_type()),
            depth:  parent_depth + dent.depth(),
            ino:    meta.ino(),
            size:   meta.size(),
            nlinks: meta.nlink(),
        };

        if entry.is_dir() {
            self.queue.push_back((entry.path.clone(), entry.depth));
        }

        Some(Ok(entry))
    }
}

impl Iterator for BreadthFirst {
    type Item = Result<Entry, FindError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self
                .current
                .as_mut()
                .and_then(|(listing, depth)| listing.next().map(|item| (item, *depth)));

            match next {
                Some((item, depth)) => {
                    if let Some(out) = self.visit(item, depth) {
                        return Some(out);
                    }
                }
                None => {
                    // Drops the previous listing, closing its handle.
                    let (dir, depth) = self.queue.pop_front()?;
                    self.current = Some((list_children(&dir), depth));
                }
            }
        }
    }
}

/// The listed directory itself must be a directory. A symlinked root is
/// followed, the same way its listing is.
fn listed_dir_check(dent: DirEntry) -> Result<(), FindError> {
    if dent.file_type().is_some_and(|ft| ft.is_dir()) {
        return Ok(());
    }
    if dent.path_is_symlink() {
        match fs::metadata(dent.path()) {
            Ok(meta) if meta.is_dir() => return Ok(()),
            Ok(_) => {}
            Err(e) => return Err(FindError::from_io(dent.into_path(), e)),
        }
    }
    Err(FindError::NotADirectory(dent.into_path()))
}

/// Direct children of `dir` in raw enumeration order, unfiltered and
/// without following links.
fn list_children(dir: &Path) -> Walk {
    WalkBuilder::new(dir)
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(false)
        .same_file_system(false)
        .max_depth(Some(1))
        .build()
}

fn map_ignore_error(e: ignore::Error) -> FindError {
    map_with_path(e, None)
}

fn map_with_path(e: ignore::Error, path: Option<PathBuf>) -> FindError {
    match e {
        ignore::Error::WithPath { path, err } => map_with_path(*err, Some(path)),
        ignore::Error::WithDepth { err, .. } => map_with_path(*err, path),
        ignore::Error::Io(io_err) => FindError::from_io(path.unwrap_or_default(), io_err),
        other => FindError::Walk(other.to_string()),
    }
}
