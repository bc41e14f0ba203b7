//! Document type detection by file extension

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl DocumentKind {
    pub const SUPPORTED_EXTENSIONS: &'static [&'static str] = &["txt", "md", "markdown", "pdf"];

    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentKind::Pdf,
            "txt" => DocumentKind::Text,
            "md" | "markdown" => DocumentKind::Markdown,
            _ => DocumentKind::Unknown,
        }
    }

    /// Kind of the file at `path`; a missing extension is `Unknown`
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentKind::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        *self != DocumentKind::Unknown
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Text => "plain text",
            DocumentKind::Markdown => "Markdown",
            DocumentKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
