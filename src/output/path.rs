//! Path display utilities for consistent output formatting.

use std::path::{Component, Path};

/// Format a path for reports, relative to `root` when it is a child of it.
///
/// Components are joined with forward slashes on every platform and a
/// leading `./` is dropped. Returns `"."` for an empty relative path.
#[must_use]
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::CurDir => {}
            Component::RootDir => parts.push(String::new()),
            other => parts.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }

    let result = parts.join("/");
    if result.is_empty() {
        if relative.has_root() {
            return "/".to_string();
        }
        return ".".to_string();
    }
    result
}
