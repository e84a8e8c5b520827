use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds surfaced by the gallery core.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// The requested path resolves outside the gallery root.
    #[error("path escapes gallery root: {0}")]
    PathEscape(String),

    /// The resolved path does not exist or has the wrong kind.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other filesystem failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GalleryError {
    /// Classify an I/O error raised while looking up `path`.
    ///
    /// A missing target, one reached through a non-directory, or a path the
    /// OS rejects as malformed is `NotFound`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound
            | io::ErrorKind::NotADirectory
            | io::ErrorKind::InvalidInput => GalleryError::NotFound(path),
            _ => GalleryError::Io { path, source },
        }
    }

    /// True for errors a client should see as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, GalleryError::PathEscape(_) | GalleryError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
