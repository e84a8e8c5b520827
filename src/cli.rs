use clap::{ArgAction, Parser};
use std::net::IpAddr;
use std::path::PathBuf;

/// Where shareable image links point unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://comfy-output.jory.dev/images";

const EXAMPLES: &str = "\
Examples:
  miso-gallery --root ./output
  DATA_FOLDER=/srv/images PORT=8080 miso-gallery
  miso-gallery -r ./output --base-url https://cdn.example.com/images -v";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "miso-gallery",
    version,
    about = "Web gallery for browsing and pruning generated images",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directory tree served by the gallery
    #[arg(short = 'r', long = "root", env = "DATA_FOLDER", default_value = "/data")]
    pub root: PathBuf,

    /// Port to listen on
    #[arg(short = 'p', long = "port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Address to bind
    #[arg(long = "host", env = "GALLERY_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Base URL used to build shareable links to images
    #[arg(long = "base-url", env = "IMAGE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }

    /// Default log filter for the requested verbosity. `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "miso_gallery=info,tower_http=info",
            1 => "miso_gallery=debug,tower_http=debug",
            _ => "trace",
        }
    }
}
