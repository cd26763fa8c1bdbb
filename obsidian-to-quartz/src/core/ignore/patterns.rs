// src/core/ignore/patterns.rs
use regex::Regex;
use std::path::Path;

use crate::utils::{pattern_to_slash, to_slash};

/// A single line of an ignore file, compiled for matching.
///
/// The dialect is intentionally small: a trailing `/` restricts the pattern to
/// directories, a plain path matches itself and everything beneath it, and `*`
/// matches any run of characters (including `/`). There is no negation, no
/// `**`, no character classes and no escaping.
#[derive(Debug, Clone)]
pub struct ExclusionPattern {
    source: String,
    body: String,
    dir_only: bool,
    wildcard: Option<Regex>,
}

impl ExclusionPattern {
    #[inline]
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let source = pattern_to_slash(pattern);
        let (body, dir_only) = source
            .strip_suffix('/')
            .map_or((source.as_str(), false), |stripped| (stripped, true));
        let body = body.to_owned();
        let wildcard = if body.contains('*') {
            // A translation that does not compile never matches.
            Regex::new(&wildcard_to_regex(&body)).ok()
        } else {
            None
        };

        Self {
            source,
            body,
            dir_only,
            wildcard,
        }
    }

    /// The pattern as written in the ignore file, with `/` separators.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    #[must_use]
    pub const fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// Tests a `/`-separated path relative to the source root.
    #[must_use]
    pub fn matches(&self, rel_path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }

        if rel_path == self.body {
            return true;
        }

        let prefix = format!("{}/", self.body);

        if is_dir && format!("{rel_path}/").starts_with(&prefix) {
            return true;
        }

        if !is_dir {
            if let Some((parent, _)) = rel_path.rsplit_once('/') {
                if format!("{parent}/").starts_with(&prefix) {
                    return true;
                }
            }
        }

        self.wildcard
            .as_ref()
            .is_some_and(|re| re.is_match(rel_path))
    }
}

/// Translates `*` into "any run of characters" and anchors both ends.
///
/// Other characters pass through untouched, so regex metacharacters in the
/// pattern keep their regex meaning.
fn wildcard_to_regex(pattern: &str) -> String {
    format!("^{}$", pattern.replace('*', ".*"))
}

/// The ordered set of exclusion patterns for one run.
#[derive(Debug, Default, Clone)]
pub struct Patterns {
    patterns: Vec<ExclusionPattern>,
}

impl Patterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds one raw ignore-file line.
    ///
    /// Surrounding whitespace is trimmed; blank lines and `#` comments are
    /// dropped. Returns whether a pattern was added.
    #[inline]
    pub fn add_pattern(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return false;
        }
        self.patterns.push(ExclusionPattern::new(line));
        true
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ExclusionPattern> {
        self.patterns.iter()
    }

    /// Returns `true` if any pattern matches `rel_path`.
    #[inline]
    pub fn matches<P: AsRef<Path>>(&self, rel_path: P, is_dir: bool) -> bool {
        let rel_path = to_slash(rel_path.as_ref());
        self.patterns
            .iter()
            .any(|pattern| pattern.matches(&rel_path, is_dir))
    }
}

/// Decides whether an entry relative to the source root is excluded.
#[inline]
pub fn should_exclude(rel_path: &Path, patterns: &Patterns, is_dir: bool) -> bool {
    patterns.matches(rel_path, is_dir)
}
