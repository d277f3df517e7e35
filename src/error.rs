use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    // Usage
    #[error("Missing search path")]
    MissingRoot,

    #[error("Unknown option \"{0}\"")]
    UnknownOption(String),

    #[error("Missing value for option \"{0}\"")]
    MissingValue(String),

    #[error("Wrong usage of \"size\" option: \"{0}\"")]
    InvalidSize(String),

    #[error("Invalid number \"{value}\" for option \"{option}\"")]
    InvalidNumber { option: String, value: String },

    // Traversal
    #[error("{}: permission denied", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("{}: not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(String),

    // Process
    #[error("argument contains a NUL byte: {0:?}")]
    InvalidArgument(String),

    #[error("fork: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("waitpid: {0}")]
    Wait(#[source] std::io::Error),

    #[error("write error: {0}")]
    Output(#[source] std::io::Error),
}

impl FindError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::NotADirectory(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether the walk can continue after this error.
    ///
    /// Per-entry traversal failures are recoverable: the entry or subtree is
    /// skipped and the rest of the queue is still visited. Usage and process
    /// errors end the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied(_)
                | Self::NotFound(_)
                | Self::NotADirectory(_)
                | Self::Io { .. }
                | Self::Walk(_)
        )
    }

    /// Whether this error came from bad command-line input.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingRoot
                | Self::UnknownOption(_)
                | Self::MissingValue(_)
                | Self::InvalidSize(_)
                | Self::InvalidNumber { .. }
        )
    }

    pub(crate) fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Io { path, source: err },
        }
    }
}
