//! Path resolution, directory listing, breadcrumbs, and the service tying them together.

mod breadcrumb;
mod listing;
mod resolve;
mod service;
mod size;

use std::path::Path;

use crate::error::Result;

pub use breadcrumb::{
    build_breadcrumb, clean_relative, join_relative, parent_path, Breadcrumb, Crumb, HOME_LABEL,
};
pub use listing::{is_image_name, list_directory, IMAGE_EXTENSIONS};
pub use resolve::PathResolver;
pub use service::{FolderView, GalleryService};
pub use size::format_size;

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Filename component only.
    pub name: String,
    /// Directory or recognized image.
    pub kind: EntryKind,
}

/// Classification of a listed entry. Anything else is dropped from the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// An image file with its exact byte length at listing time.
    Image { size_bytes: u64 },
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// Byte length for images, `None` for directories.
    pub fn size_bytes(&self) -> Option<u64> {
        match self.kind {
            EntryKind::Directory => None,
            EntryKind::Image { size_bytes } => Some(size_bytes),
        }
    }
}

/// Aggregate counts over the entries of a [`Listing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingCounts {
    pub folders: usize,
    pub images: usize,
}

/// Sorted snapshot of one directory's folders and images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<Entry>,
    counts: ListingCounts,
}

impl Listing {
    /// Build a listing, sorting by name and deriving counts from the same sequence.
    pub fn new(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        let folders = entries.iter().filter(|e| e.is_dir()).count();
        let counts = ListingCounts {
            folders,
            images: entries.len() - folders,
        };
        Self { entries, counts }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn counts(&self) -> ListingCounts {
        self.counts
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Abstraction over directory enumeration so it can be swapped or mocked.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> Result<Listing>;
}

/// Default `DirectoryLister` backed by the walkdir-based implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkdirLister;

impl DirectoryLister for WalkdirLister {
    fn list(&self, dir: &Path) -> Result<Listing> {
        list_directory(dir)
    }
}
