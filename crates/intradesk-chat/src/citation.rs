//! Icon selection for cited sources.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("Invalid URL scheme regex"));

/// Icon shown next to a cited source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceIcon {
    /// Web page.
    Link,
    /// Local or shared file.
    Document,
}

impl SourceIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Document => "document",
        }
    }
}

impl std::fmt::Display for SourceIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Link` when `source` starts with a URL scheme (`https://`, `ftp://`, ...),
/// `Document` otherwise, including for empty input.
pub fn source_icon(source: &str) -> SourceIcon {
    if URL_SCHEME.is_match(source.trim_start()) {
        SourceIcon::Link
    } else {
        SourceIcon::Document
    }
}

/// A distinct source referenced by an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub source: String,
    pub icon: SourceIcon,
}

impl Citation {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let icon = source_icon(&source);
        Self { source, icon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_link() {
        assert_eq!(source_icon("https://example.com/doc"), SourceIcon::Link);
        assert_eq!(source_icon("http://intranet/wiki"), SourceIcon::Link);
        assert_eq!(source_icon("ftp://files.example.com/a.pdf"), SourceIcon::Link);
    }

    #[test]
    fn test_path_is_document() {
        assert_eq!(source_icon("/local/file.pdf"), SourceIcon::Document);
        assert_eq!(source_icon("data/roster.csv"), SourceIcon::Document);
        assert_eq!(source_icon(r"C:\docs\policy.docx"), SourceIcon::Document);
    }

    #[test]
    fn test_empty_is_document() {
        assert_eq!(source_icon(""), SourceIcon::Document);
        assert_eq!(source_icon("   "), SourceIcon::Document);
    }

    #[test]
    fn test_scheme_without_slashes_is_document() {
        assert_eq!(source_icon("mailto:hr@example.com"), SourceIcon::Document);
        assert_eq!(source_icon("httpdocs/readme.md"), SourceIcon::Document);
    }

    #[test]
    fn test_icon_strings() {
        assert_eq!(SourceIcon::Link.as_str(), "link");
        assert_eq!(SourceIcon::Document.to_string(), "document");
    }

    #[test]
    fn test_citation_new() {
        let c = Citation::new("https://example.com/handbook");
        assert_eq!(c.icon, SourceIcon::Link);
        assert_eq!(c.source, "https://example.com/handbook");
    }
}
