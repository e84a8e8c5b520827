//! HTML rendering of folder views using maud.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::GalleryConfig;
use crate::gallery::{
    format_size, join_relative, Breadcrumb, Entry, EntryKind, FolderView, HOME_LABEL,
};
use crate::links::{delete_href, folder_href, thumb_href, view_href};

pub const PAGE_TITLE: &str = "Miso Gallery";

/// Shown when a folder has neither sub-folders nor images.
pub const EMPTY_MESSAGE: &str = "No images in this folder";

const STYLE: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { background: #0d0d0d; color: #e0e0e0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; min-height: 100vh; }
header { background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%); padding: 20px 30px; display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid #333; }
h1 { font-size: 1.5rem; color: #f5a623; }
.breadcrumb { color: #888; font-size: 0.9rem; }
.breadcrumb a { color: #f5a623; text-decoration: none; }
.container { padding: 20px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 15px; }
.folder, .image-card { background: #1a1a1a; border-radius: 10px; overflow: hidden; transition: transform 0.2s, box-shadow 0.2s; cursor: pointer; }
.folder:hover, .image-card:hover { transform: translateY(-3px); box-shadow: 0 8px 25px rgba(245, 166, 35, 0.15); }
.folder { padding: 30px; text-align: center; border: 1px dashed #444; text-decoration: none; }
.folder-icon { font-size: 3rem; margin-bottom: 10px; }
.folder-name { color: #f5a623; font-weight: 500; }
.image-card { position: relative; }
.image-card img { width: 100%; height: 180px; object-fit: cover; display: block; }
.image-info { padding: 10px; font-size: 0.8rem; color: #888; }
.image-info a { color: #888; }
.image-name { white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.delete-btn { position: absolute; top: 10px; right: 10px; background: rgba(220, 53, 69, 0.9); color: white; border: none; padding: 8px 12px; border-radius: 5px; cursor: pointer; font-size: 0.8rem; opacity: 0; transition: opacity 0.2s; }
.image-card:hover .delete-btn { opacity: 1; }
.delete-btn:hover { background: #dc3545; }
.empty { text-align: center; padding: 50px; color: #666; }
.stats { color: #666; font-size: 0.85rem; margin-top: 20px; text-align: center; }
"#;

/// Render a full gallery page for one folder.
pub fn render_folder(view: &FolderView, config: &GalleryConfig) -> Markup {
    let counts = view.listing.counts();
    page(html! {
        header {
            h1 { "🍲 " (PAGE_TITLE) }
            div class="breadcrumb" { (render_breadcrumb(&view.breadcrumb)) }
        }
        div class="container" {
            @if view.listing.is_empty() {
                div class="empty" { (EMPTY_MESSAGE) }
            } @else {
                div class="grid" {
                    @for entry in view.listing.entries() {
                        (render_entry(entry, &view.relative_path, config))
                    }
                }
            }
            div class="stats" {
                (counts.folders) " folders • " (counts.images) " images"
            }
        }
    })
}

/// Render the trail: the home label alone at the root, links plus the current folder elsewhere.
pub fn render_breadcrumb(breadcrumb: &Breadcrumb) -> Markup {
    html! {
        @if let Some(current) = &breadcrumb.current {
            a href="/" { "Home" }
            @for crumb in &breadcrumb.ancestors {
                " / "
                a href=(folder_href(&crumb.path)) { (crumb.label) }
            }
            " / " (current)
        } @else {
            (HOME_LABEL)
        }
    }
}

fn render_entry(entry: &Entry, folder: &str, config: &GalleryConfig) -> Markup {
    let path = join_relative(folder, &entry.name);
    match entry.kind {
        EntryKind::Directory => html! {
            a href=(folder_href(&path)) class="folder" {
                div class="folder-icon" { "📁" }
                div class="folder-name" { (entry.name) }
            }
        },
        EntryKind::Image { size_bytes } => html! {
            div class="image-card" {
                a href=(view_href(&path)) target="_blank" {
                    img src=(thumb_href(&path)) alt=(entry.name) loading="lazy";
                }
                div class="image-info" {
                    div class="image-name" { (entry.name) }
                    div { (format_size(size_bytes)) }
                    a href=(config.share_url(&path)) class="share-link" { "share" }
                }
                form method="POST" action=(delete_href(&path)) {
                    button type="submit" class="delete-btn" data-name=(entry.name)
                        onclick="return confirm('Delete ' + this.dataset.name + '?')" { "🗑️" }
                }
            }
        },
    }
}

/// Minimal page used for 404 and 500 responses.
pub fn render_error(message: &str) -> Markup {
    page(html! {
        header {
            h1 { "🍲 " (PAGE_TITLE) }
            div class="breadcrumb" { a href="/" { "Home" } }
        }
        div class="container" {
            div class="empty" { (message) }
        }
    })
}

fn page(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
                style { (PreEscaped(STYLE)) }
            }
            body { (body) }
        }
    }
}
