use std::fs;
use std::path::Path;
use tracing::{debug, error};
use walkdir::WalkDir;

use super::{Entry, EntryKind, Listing};
use crate::error::{GalleryError, Result};

/// Extensions recognized as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Suffix check only; file contents are never inspected.
pub fn is_image_name(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

/// List the direct children of `dir` that are directories or images.
///
/// Fails with `NotFound` when `dir` is missing or not a directory. Links are
/// followed. A link whose target is gone is dropped unless its name marks it
/// as an image; any other error while enumerating or stat-ing a child aborts
/// the whole listing.
pub fn list_directory(dir: &Path) -> Result<Listing> {
    let meta = fs::metadata(dir).map_err(|e| GalleryError::from_io(dir, e))?;
    if !meta.is_dir() {
        return Err(GalleryError::NotFound(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir).min_depth(1).max_depth(1);

    let mut entries = Vec::new();
    for entry_result in walker {
        let entry = entry_result.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            error!(path = %path.display(), "failed to enumerate directory: {e}");
            GalleryError::Io {
                path,
                source: e.into(),
            }
        })?;

        let name = entry.file_name().to_string_lossy().to_string();
        let is_image = is_image_name(&name);
        // Stat through links here; failures are races or permission problems, never a 404.
        let target = match fs::metadata(entry.path()) {
            Ok(target) => target,
            Err(e) if entry.path_is_symlink() && !is_image => {
                debug!(path = %entry.path().display(), "skipping dangling link: {e}");
                continue;
            }
            Err(source) => {
                return Err(GalleryError::Io {
                    path: entry.path().to_path_buf(),
                    source,
                })
            }
        };

        if target.is_dir() {
            entries.push(Entry {
                name,
                kind: EntryKind::Directory,
            });
        } else if is_image {
            entries.push(Entry {
                name,
                kind: EntryKind::Image {
                    size_bytes: target.len(),
                },
            });
        }
    }

    let listing = Listing::new(entries);
    debug!(
        dir = %dir.display(),
        folders = listing.counts().folders,
        images = listing.counts().images,
        "listed directory"
    );
    Ok(listing)
}
