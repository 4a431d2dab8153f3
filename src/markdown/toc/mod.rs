mod generator;
mod parser;

use serde::{Deserialize, Serialize};

use crate::markdown::anchor::NormalizationStyle;

pub use generator::{generate_toc, render, TOC_BEGIN_COMMENT, TOC_END_COMMENT};
pub use parser::{assign_serials, extract_headings, extract_toc};

/// Options for table of contents generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocOptions {
    /// Wrap the list in the begin/end sentinel comments
    pub include_begin_end_comment: bool,
    /// Whether to render level-1 headings
    pub include_title: bool,
    /// Caption bullet placed above the entries when titles are excluded
    pub toc_title: Option<String>,
    pub bullet_char: char,
    /// Columns per nesting level
    pub indentation: usize,
    pub indentation_char: char,
    /// Anchor style for the links
    pub style: NormalizationStyle,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            include_begin_end_comment: false,
            include_title: false,
            toc_title: None,
            bullet_char: '-',
            indentation: 2,
            indentation_char: ' ',
            style: NormalizationStyle::Markdown,
        }
    }
}
