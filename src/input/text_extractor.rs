//! Text extraction from resume documents

use crate::error::{AssessorError, Result};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

const HTML_TAG_PATTERN: &str = r"<[^>]*>";

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            AssessorError::PdfExtraction(format!(
                "Failed to extract text from '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

/// Renders Markdown to HTML, then flattens it back to text.
/// List items become `- ` lines so bullet structure still counts toward formatting.
pub struct MarkdownExtractor {
    tag_pattern: Regex,
}

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(self.markdown_to_text(&markdown))
    }
}

impl MarkdownExtractor {
    pub fn new() -> Result<Self> {
        let tag_pattern = Regex::new(HTML_TAG_PATTERN).map_err(|e| {
            AssessorError::Analysis(format!("Failed to compile HTML tag pattern: {}", e))
        })?;

        Ok(Self { tag_pattern })
    }

    pub fn markdown_to_text(&self, markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.html_to_text(&html_output)
    }

    fn html_to_text(&self, html: &str) -> String {
        let marked = html
            .replace("<li>", "\n- ")
            .replace("<br />", "\n")
            .replace("</p>", "\n")
            .replace("</h1>", "\n")
            .replace("</h2>", "\n")
            .replace("</h3>", "\n");

        let stripped = self
            .strip_tags(&marked)
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        stripped
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn strip_tags(&self, html: &str) -> String {
        self.tag_pattern.replace_all(html, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_keeps_bullets() {
        let markdown = "# Jane Doe\n\n## Skills\n\n* Python\n* Rust & Go\n\nLed **three** teams.\n";
        let text = MarkdownExtractor::new().unwrap().markdown_to_text(markdown);

        assert_eq!(text, "Jane Doe\nSkills\n- Python\n- Rust & Go\nLed three teams.");
    }

    #[test]
    fn test_strip_tags() {
        let extractor = MarkdownExtractor::new().unwrap();
        assert_eq!(extractor.strip_tags("<p>Hello <em>world</em></p>"), "Hello world");
        assert_eq!(extractor.strip_tags("<a href=\"x\">link</a> &amp; <br />"), "link &amp; ");
    }
}
