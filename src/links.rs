//! URL construction for routes and shareable links.

/// Percent-encode each segment of a slash-separated relative path.
pub fn encode_path(relative: &str) -> String {
    relative
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Link to a folder view; the root is `/`.
pub fn folder_href(relative: &str) -> String {
    format!("/{}", encode_path(relative))
}

pub fn thumb_href(relative: &str) -> String {
    format!("/thumb/{}", encode_path(relative))
}

pub fn view_href(relative: &str) -> String {
    format!("/view/{}", encode_path(relative))
}

pub fn delete_href(relative: &str) -> String {
    format!("/delete/{}", encode_path(relative))
}

/// Absolute link for sharing an image outside the gallery.
pub fn share_url(base_url: &str, relative: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), encode_path(relative))
}
