pub mod anchor;
pub mod header;
pub mod rewriter;
pub mod structure;
pub mod toc;
pub mod types;

pub use anchor::{normalize, normalize_anchor, NormalizationStyle};
pub use header::{extract_file_header, FILE_HEADER_BEGIN_COMMENT, FILE_HEADER_END_COMMENT};
pub use rewriter::{update_document, write_toc, RewriteOptions};
pub use structure::MarkdownStructure;
pub use toc::{extract_toc, generate_toc, TocOptions};
pub use types::{FileHeaderMap, HeaderValue, HeadingRecord, TocTree};
