mod common;

use common::{test_config, SHARE_BASE};
use miso_gallery::gallery::{build_breadcrumb, Entry, EntryKind, FolderView, Listing};
use miso_gallery::render::{render_breadcrumb, render_error, render_folder, EMPTY_MESSAGE};
use tempfile::TempDir;

fn image(name: &str, size_bytes: u64) -> Entry {
    Entry {
        name: name.to_string(),
        kind: EntryKind::Image { size_bytes },
    }
}

fn folder(name: &str) -> Entry {
    Entry {
        name: name.to_string(),
        kind: EntryKind::Directory,
    }
}

fn view(relative: &str, entries: Vec<Entry>) -> FolderView {
    FolderView {
        relative_path: relative.to_string(),
        listing: Listing::new(entries),
        breadcrumb: build_breadcrumb(relative),
    }
}

fn render(view: &FolderView) -> String {
    let tmp = TempDir::new().unwrap();
    render_folder(view, &test_config(tmp.path())).into_string()
}

// --- Breadcrumb ---

#[test]
fn test_home_breadcrumb_is_sentinel_only() {
    let html = render_breadcrumb(&build_breadcrumb("")).into_string();
    assert_eq!(html, "All Images");
}

#[test]
fn test_nested_breadcrumb_links_are_well_formed() {
    let html = render_breadcrumb(&build_breadcrumb("a/b/c")).into_string();
    assert_eq!(
        html,
        r#"<a href="/">Home</a> / <a href="/a">a</a> / <a href="/a/b">b</a> / c"#
    );
}

// --- Page ---

#[test]
fn test_empty_folder_message() {
    let html = render(&view("", vec![]));
    assert!(html.contains(EMPTY_MESSAGE));
    assert!(html.contains("0 folders • 0 images"));
}

#[test]
fn test_folder_card_links_into_folder() {
    let html = render(&view("runs", vec![folder("day 1")]));
    assert!(html.contains(r#"href="/runs/day%201""#));
    assert!(html.contains("1 folders • 0 images"));
}

#[test]
fn test_image_card_routes_and_size() {
    let html = render(&view("a", vec![image("out.png", 1536)]));
    assert!(html.contains(r#"src="/thumb/a/out.png""#));
    assert!(html.contains(r#"href="/view/a/out.png""#));
    assert!(html.contains(r#"action="/delete/a/out.png""#));
    assert!(html.contains("1.5 KB"));
    assert!(html.contains(&format!("{SHARE_BASE}/a/out.png")));
    assert!(html.contains("0 folders • 1 images"));
}

#[test]
fn test_entries_rendered_in_listing_order() {
    let html = render(&view("", vec![image("b.png", 1), folder("a"), image("C.gif", 1)]));
    let c = html.find("C.gif").unwrap();
    let a = html.find(r#"class="folder-name">a<"#).unwrap();
    let b = html.find("b.png").unwrap();
    assert!(c < a && a < b);
}

#[test]
fn test_names_are_html_escaped() {
    let html = render(&view("", vec![image("<script>alert(1)</script>.png", 10)]));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_quote_in_name_cannot_break_confirm_script() {
    let html = render(&view("", vec![image("it's.png", 10)]));
    assert!(html.contains("this.dataset.name"));
    assert!(!html.contains("Delete it's.png"));
}

#[test]
fn test_error_page_carries_message() {
    let html = render_error("Not found").into_string();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Not found"));
}
