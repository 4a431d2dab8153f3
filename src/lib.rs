//! Table of contents generation for Markdown documents.
//!
//! Headings are scanned into a [`tree::Tree`], rendered as an anchor-linked
//! bullet list and written back between `<!-- GMT TOC BEGIN -->` and
//! `<!-- GMT TOC END -->`, leaving the rest of the document untouched.

pub mod config;
pub mod markdown;
pub mod tree;
pub mod utils;

pub use markdown::{
    extract_file_header, extract_toc, generate_toc, normalize, update_document, write_toc,
    MarkdownStructure, NormalizationStyle, RewriteOptions, TocOptions,
};
pub use tree::{RenderOptions, Tree};
pub use utils::error::{BoxResult, TocError};
