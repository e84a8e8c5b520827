//! Process-wide configuration, built once at startup.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cli::Args;
use crate::links;

/// Immutable settings shared by reference with every component.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Canonical root directory; all filesystem access stays beneath it.
    pub root: PathBuf,
    /// Address the HTTP server binds.
    pub addr: SocketAddr,
    /// Prefix for shareable image links. Never used for resolution.
    pub base_url: String,
}

impl GalleryConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let root = args
            .root
            .canonicalize()
            .with_context(|| format!("{}: failed to resolve root", args.root.display()))?;
        anyhow::ensure!(root.is_dir(), "{}: Not a directory", root.display());

        Ok(Self {
            root,
            addr: SocketAddr::new(args.host, args.port),
            base_url: args.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// External link to the image at `relative`.
    pub fn share_url(&self, relative: &str) -> String {
        links::share_url(&self.base_url, relative)
    }
}
