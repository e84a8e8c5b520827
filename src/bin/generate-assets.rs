#![forbid(unsafe_code)]

//! Writes shell completions and the man page for `miso-gallery` so they can
//! ship alongside the container image. Output goes to `dist/` unless a
//! directory is passed as the first argument.

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use miso_gallery::cli::Args;
use std::fs;
use std::path::{Path, PathBuf};

const BIN_NAME: &str = "miso-gallery";

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let scripts = write_completions(&out_dir.join("completions"))?;
    let man_page = write_man_page(&out_dir.join("man"))?;

    for script in &scripts {
        eprintln!("{BIN_NAME}: wrote {}", script.display());
    }
    eprintln!("{BIN_NAME}: wrote {}", man_page.display());
    Ok(())
}

fn write_completions(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell]
        .into_iter()
        .map(|shell| {
            generate_to(shell, &mut Args::command(), BIN_NAME, dir)
                .with_context(|| format!("failed to write {shell} completions"))
        })
        .collect()
}

fn write_man_page(dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let path = dir.join(format!("{BIN_NAME}.1"));
    fs::write(&path, page).with_context(|| format!("{}: cannot write", path.display()))?;
    Ok(path)
}
