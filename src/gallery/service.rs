use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::breadcrumb::{build_breadcrumb, clean_relative, Breadcrumb};
use super::resolve::PathResolver;
use super::{DirectoryLister, Listing, WalkdirLister};
use crate::error::{GalleryError, Result};

/// Everything needed to render one folder page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderView {
    /// The requested folder with redundant separators removed.
    pub relative_path: String,
    pub listing: Listing,
    pub breadcrumb: Breadcrumb,
}

/// Answers folder, file, and delete requests against the live filesystem.
///
/// Holds nothing but the resolver and lister; every call re-reads the tree.
#[derive(Debug, Clone)]
pub struct GalleryService<L = WalkdirLister> {
    resolver: PathResolver,
    lister: L,
}

impl GalleryService {
    pub fn new(root: &Path) -> Result<Self> {
        Self::with_lister(root, WalkdirLister)
    }
}

impl<L: DirectoryLister> GalleryService<L> {
    pub fn with_lister(root: &Path, lister: L) -> Result<Self> {
        Ok(Self {
            resolver: PathResolver::new(root)?,
            lister,
        })
    }

    pub fn root(&self) -> &Path {
        self.resolver.root()
    }

    /// List a folder under the root together with its breadcrumb trail.
    pub fn view_folder(&self, relative: &str) -> Result<FolderView> {
        let dir = self.resolver.resolve(relative)?;
        debug!(requested = relative, dir = %dir.display(), "viewing folder");
        let listing = self.lister.list(&dir)?;
        let relative_path = clean_relative(relative);
        let breadcrumb = build_breadcrumb(&relative_path);
        Ok(FolderView {
            relative_path,
            listing,
            breadcrumb,
        })
    }

    /// Resolve a path that must name an existing regular file.
    pub fn resolve_file(&self, relative: &str) -> Result<PathBuf> {
        let path = self.resolver.resolve(relative)?;
        let meta = fs::metadata(&path).map_err(|e| GalleryError::from_io(&path, e))?;
        if meta.is_file() {
            Ok(path)
        } else {
            Err(GalleryError::NotFound(path))
        }
    }

    /// Remove a file under the root. A target that does not exist is a no-op.
    pub fn delete_image(&self, relative: &str) -> Result<()> {
        let target = match self.resolver.resolve_child(relative) {
            Ok(target) => target,
            // A name no file can carry is absent too.
            Err(GalleryError::NotFound(_)) => return Ok(()),
            Err(e) => return Err(e),
        };
        if fs::symlink_metadata(&target).is_err() {
            debug!(path = %target.display(), "delete target absent, nothing to do");
            return Ok(());
        }
        match fs::remove_file(&target) {
            Ok(()) => {
                info!(path = %target.display(), "deleted file");
                Ok(())
            }
            // Lost a race with another delete.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(GalleryError::Io {
                path: target,
                source,
            }),
        }
    }
}
