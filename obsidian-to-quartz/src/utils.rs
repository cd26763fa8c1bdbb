// src/utils.rs
use std::ffi::OsStr;
use std::path::{Component, Path};

/// Name of the folder whose contents are reduced to exported `.svg` drawings.
const EXCALIDRAW_FOLDER: &str = "excalidraw";

pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// Case-sensitive suffix check that works for non-UTF-8 names.
pub fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// Checks whether any segment of `rel_path` is named `Excalidraw`, ignoring case.
///
/// The final segment (the file name itself) is included in the check.
pub fn is_in_excalidraw_folder(rel_path: &Path) -> bool {
    rel_path.components().any(|component| match component {
        Component::Normal(part) => part
            .to_str()
            .is_some_and(|s| s.eq_ignore_ascii_case(EXCALIDRAW_FOLDER)),
        _ => false,
    })
}

/// Renders a relative path with `/` separators regardless of platform.
pub fn to_slash(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Replaces the platform separator in a raw pattern string with `/`.
pub fn pattern_to_slash(pattern: &str) -> String {
    if std::path::MAIN_SEPARATOR == '/' {
        pattern.to_owned()
    } else {
        pattern.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
