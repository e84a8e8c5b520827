use assert_cmd::Command;
use clap::{CommandFactory, Parser};
use miso_gallery::cli::{Args, DEFAULT_BASE_URL};
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with every configuration variable cleared from its environment.
fn gallery_bin() -> Command {
    let mut cmd = Command::cargo_bin("miso-gallery").unwrap();
    for var in ["DATA_FOLDER", "PORT", "GALLERY_HOST", "IMAGE_BASE_URL"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_generate_assets_writes_into_given_dir() {
    let tmp = TempDir::new().unwrap();
    Command::cargo_bin("generate-assets")
        .unwrap()
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("miso-gallery: wrote"));
    assert!(tmp.path().join("man/miso-gallery.1").is_file());
    assert!(tmp.path().join("completions/miso-gallery.bash").is_file());
    assert!(tmp.path().join("completions/_miso-gallery").is_file());
}

fn default_of(id: &str) -> Vec<String> {
    let cmd = Args::command();
    let arg = cmd
        .get_arguments()
        .find(|a| a.get_id().as_str() == id)
        .unwrap();
    arg.get_default_values()
        .iter()
        .map(|v| v.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_help_flag() {
    gallery_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Web gallery"))
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    gallery_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("miso-gallery"));
}

#[test]
fn test_nonexistent_root_exits_with_error() {
    gallery_bin()
        .args(["--root", "/this/path/does/not/exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_file_root_exits_with_error() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("afile.png");
    std::fs::write(&file, "hello").unwrap();

    gallery_bin()
        .args(["--root", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_defaults_match_deployment() {
    assert_eq!(default_of("root"), vec!["/data"]);
    assert_eq!(default_of("port"), vec!["5000"]);
    assert_eq!(default_of("host"), vec!["0.0.0.0"]);
    assert_eq!(default_of("base_url"), vec![DEFAULT_BASE_URL]);
}

#[test]
fn test_explicit_flags() {
    let args = Args::parse_from([
        "miso-gallery",
        "--root",
        "/srv/images",
        "--port",
        "8080",
        "--host",
        "127.0.0.1",
    ]);
    assert_eq!(args.root, std::path::PathBuf::from("/srv/images"));
    assert_eq!(args.port, 8080);
    assert_eq!(args.host.to_string(), "127.0.0.1");
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let args =
        Args::parse_from(["miso-gallery", "--base-url", "https://cdn.test/img//"]).validated();
    assert_eq!(args.base_url, "https://cdn.test/img");
}

#[test]
fn test_verbose_count_levels() {
    let args = Args::parse_from(["miso-gallery", "-vv"]).validated();
    assert_eq!(args.verbose, 2);
    assert_eq!(args.log_filter(), "trace");
}

#[test]
fn test_quiet_resets_verbose() {
    let args = Args::parse_from(["miso-gallery", "-vv", "--quiet"]).validated();
    assert!(args.quiet);
    assert_eq!(args.verbose, 0, "quiet should reset verbosity to 0");
    assert_eq!(args.log_filter(), "warn");
}

#[test]
fn test_invalid_port_rejected() {
    assert!(Args::try_parse_from(["miso-gallery", "--port", "70000"]).is_err());
}
