//! Input manager: routes resume files to the right extractor and caches results

use crate::error::{AssessorError, Result};
use crate::input::file_detector::DocumentKind;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(AssessorError::Validation(format!(
                "Resume file does not exist: {}",
                path.display()
            )));
        }

        let kind = DocumentKind::from_path(path);
        info!("Reading {} resume: {}", kind, path.display());

        let text = match kind {
            DocumentKind::Pdf => PdfExtractor.extract(path).await?,
            DocumentKind::Text => PlainTextExtractor.extract(path).await?,
            DocumentKind::Markdown => MarkdownExtractor::new()?.extract(path).await?,
            DocumentKind::Unknown => {
                return Err(AssessorError::UnsupportedFormat(format!(
                    "{} (supported: {})",
                    path.display(),
                    DocumentKind::SUPPORTED_EXTENSIONS.join(", ")
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
