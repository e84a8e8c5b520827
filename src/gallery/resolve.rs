use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

use crate::error::{GalleryError, Result};

/// Maps client-supplied relative paths onto the filesystem, confined to a root.
///
/// Every entry point (folder view, file delivery, delete) goes through here,
/// so the containment check lives in exactly one place.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Bind a resolver to `root`, canonicalizing it once.
    pub fn new(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .map_err(|e| GalleryError::from_io(root, e))?;
        Ok(Self { root })
    }

    /// The canonical root every resolution is confined to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `relative` to a canonical absolute path under the root.
    ///
    /// The target does not need to exist: the longest existing ancestor is
    /// canonicalized (following symlinks) and the missing tail is appended.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let segments = split_segments(relative)?;
        let joined = join_segments(&self.root, &segments);
        self.contain(relative, canonicalize_existing(&joined))
    }

    /// Resolve the parent of `relative` canonically and append the final
    /// segment as-is, so a symlink at the target is addressed, not followed.
    pub fn resolve_child(&self, relative: &str) -> Result<PathBuf> {
        let mut segments = split_segments(relative)?;
        let Some(name) = segments.pop() else {
            return Ok(self.root.clone());
        };
        let parent = join_segments(&self.root, &segments);
        let parent = self.contain(relative, canonicalize_existing(&parent))?;
        Ok(parent.join(name))
    }

    fn contain(&self, relative: &str, candidate: PathBuf) -> Result<PathBuf> {
        if candidate.starts_with(&self.root) {
            Ok(candidate)
        } else {
            warn!(
                requested = relative,
                resolved = %candidate.display(),
                "path resolved outside gallery root"
            );
            Err(GalleryError::PathEscape(relative.to_string()))
        }
    }
}

/// Longest file name most filesystems accept, in bytes.
const MAX_SEGMENT_LEN: usize = 255;

/// Split on either separator style, dropping empty and `.` segments and
/// folding `..` into its predecessor. Climbing above the root, or any segment
/// that is not a plain file name (drive prefixes and the like), is an escape.
/// A segment no file could carry (embedded NUL, over-long) is `NotFound`.
///
/// Breadcrumbs and redirects segment paths through this too, so they always
/// agree with what was resolved.
pub(crate) fn split_segments(relative: &str) -> Result<Vec<&str>> {
    let escape = || GalleryError::PathEscape(relative.to_string());
    let mut segments = Vec::new();
    for segment in relative.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop().ok_or_else(escape)?;
            }
            name if name.contains('\0') || name.len() > MAX_SEGMENT_LEN => {
                return Err(GalleryError::NotFound(PathBuf::from(relative)));
            }
            name => {
                let mut components = Path::new(name).components();
                match (components.next(), components.next()) {
                    (Some(Component::Normal(_)), None) => segments.push(name),
                    _ => return Err(escape()),
                }
            }
        }
    }
    Ok(segments)
}

fn join_segments(root: &Path, segments: &[&str]) -> PathBuf {
    let mut path = root.to_path_buf();
    path.extend(segments);
    path
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest.
fn canonicalize_existing(path: &Path) -> PathBuf {
    let mut tail: Vec<&OsStr> = Vec::new();
    let mut current = path;
    loop {
        if let Ok(mut base) = current.canonicalize() {
            base.extend(tail.iter().rev());
            return base;
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name);
                current = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}
