//! Embedded document previewer.
//!
//! Paginates a fetched document by the page count reported from parsing its
//! content; navigation is sequential, clamped at both ends.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("unable to parse document: {0}")]
    Parse(String),

    #[error("document has no pages")]
    Empty,
}

/// A page-wise text rendering of a fetched document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPreview {
    pages: Vec<String>,
    current: usize,
}

impl DocumentPreview {
    /// Parses PDF bytes into per-page text.
    pub fn from_pdf(bytes: &[u8]) -> Result<Self, PreviewError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|err| PreviewError::Parse(err.to_string()))?;
        Self::from_pages(pages)
    }

    /// Builds a preview over already-extracted pages.
    pub fn from_pages(pages: Vec<String>) -> Result<Self, PreviewError> {
        if pages.is_empty() {
            return Err(PreviewError::Empty);
        }
        Ok(Self { pages, current: 0 })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Zero-based index of the page currently shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> &str {
        &self.pages[self.current]
    }

    /// Renders page `index` (zero-based) without moving the cursor.
    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    /// Advances one page; returns whether the cursor moved.
    pub fn next_page(&mut self) -> bool {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one page; returns whether the cursor moved.
    pub fn prev_page(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }
}
