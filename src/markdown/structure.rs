use crate::markdown::header::extract_file_header;
use crate::markdown::toc::extract_toc;
use crate::markdown::types::{FileHeaderMap, TocTree};
use crate::utils::error::TocError;

/// Structural data of one Markdown document
#[derive(Debug, Clone)]
pub struct MarkdownStructure {
    pub file_header: FileHeaderMap,
    pub toc_tree: TocTree,
}

impl MarkdownStructure {
    /// Parse both the metadata header and the heading hierarchy.
    ///
    /// Fails only when the metadata header holds a malformed value; use
    /// [`extract_toc`] directly when the header does not matter.
    pub fn parse(markdown: &str) -> Result<Self, TocError> {
        Ok(Self {
            file_header: extract_file_header(markdown)?,
            toc_tree: extract_toc(markdown),
        })
    }

    /// Text of the top-level headings
    pub fn titles(&self) -> Vec<&str> {
        self.toc_tree
            .branches
            .iter()
            .map(|branch| branch.data.content.as_str())
            .collect()
    }
}
