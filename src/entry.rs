use std::ffi::OsString;
use std::path::PathBuf;

/// One filesystem entry seen during traversal, with the metadata the
/// filters look at.
///
/// Built from a non-following stat, so a symlink is described as a symlink
/// (its own inode, size and link count), never as its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full path: the parent directory joined with `name`.
    pub path: PathBuf,

    /// Last path component.
    pub name: OsString,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// Distance from the search root. Children of the root are at depth 1.
    pub depth: usize,

    /// Inode number.
    pub ino: u64,

    /// Size in bytes.
    pub size: u64,

    /// Hard-link count.
    pub nlinks: u64,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The kind of a traversed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory. Only directories are descended into.
    Dir,

    /// A symbolic link, whatever it points at.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    pub(crate) fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}
