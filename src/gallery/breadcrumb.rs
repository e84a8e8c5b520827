use super::resolve::split_segments;

/// Label shown alone when browsing the root.
pub const HOME_LABEL: &str = "All Images";

/// A navigable ancestor in the trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Slash-joined path of every segment up to and including this one.
    pub path: String,
}

/// Navigation trail derived from a relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Ancestors, outermost first.
    pub ancestors: Vec<Crumb>,
    /// Final segment, rendered as plain text. `None` at the root.
    pub current: Option<String>,
}

impl Breadcrumb {
    /// True when the trail collapses to the home sentinel.
    pub fn is_home(&self) -> bool {
        self.current.is_none()
    }
}

/// Segments exactly as the resolver sees them. A path the resolver would
/// reject has no segments and collapses to home.
fn segments(relative: &str) -> Vec<&str> {
    split_segments(relative).unwrap_or_default()
}

/// Build the breadcrumb trail for `relative`. Never fails; empty input is home.
pub fn build_breadcrumb(relative: &str) -> Breadcrumb {
    let parts = segments(relative);
    let Some((last, ancestors)) = parts.split_last() else {
        return Breadcrumb::default();
    };

    let ancestors = ancestors
        .iter()
        .enumerate()
        .map(|(i, label)| Crumb {
            label: (*label).to_string(),
            path: parts[..=i].join("/"),
        })
        .collect();

    Breadcrumb {
        ancestors,
        current: Some((*last).to_string()),
    }
}

/// `"/a//./b\c/"` becomes `"a/b/c"`.
/// `"/a//./b\\c/"` becomes `"a/b/c"`.
pub fn clean_relative(relative: &str) -> String {
    segments(relative).join("/")
}

/// Every segment but the last, joined. Empty for top-level paths.
pub fn parent_path(relative: &str) -> String {
    let parts = segments(relative);
    match parts.split_last() {
        Some((_, parent)) => parent.join("/"),
        None => String::new(),
    }
}

/// Append `name` to a slash-separated relative path.
pub fn join_relative(parent: &str, name: &str) -> String {
    let parent = parent.trim_matches('/');
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
