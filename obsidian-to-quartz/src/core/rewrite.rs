// src/core/rewrite.rs
use regex::bytes::{NoExpand, Regex};
use std::sync::LazyLock;

/// `[[NAME.excalidraw]]`, where `NAME` is any bytes except `|` and `]`.
static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[((?-u:[^|\]])+?)\.excalidraw\]\]").expect("wiki link pattern is valid")
});

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.excalidraw\.md\)").expect("markdown link pattern is valid")
});

/// Points Excalidraw links in a markdown document at their exported SVGs.
///
/// Two substitutions run over the whole buffer, in order:
///
/// 1. `[[NAME.excalidraw]]` becomes `[[NAME.excalidraw.svg|NAME]]`.
/// 2. Every literal `.excalidraw.md)` becomes `.excalidraw.svg)`.
///
/// The second rule is a blind substring replacement and also applies inside
/// code spans and fences. Already rewritten content passes through unchanged.
#[must_use]
pub fn rewrite_links(content: &[u8]) -> Vec<u8> {
    let wiki = WIKI_LINK.replace_all(content, &b"[[${1}.excalidraw.svg|${1}]]"[..]);
    MARKDOWN_LINK
        .replace_all(&wiki, NoExpand(b".excalidraw.svg)"))
        .into_owned()
}
