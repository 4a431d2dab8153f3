use log::{debug, info};

use crate::markdown::toc::{
    extract_toc, generate_toc, TocOptions, TOC_BEGIN_COMMENT, TOC_END_COMMENT,
};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Marker placed under a freshly inserted TOC block
pub const HORIZONTAL_RULE: &str = "---";

/// Where the document comes from and whether the result is persisted
#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    /// Treat the input as the document itself rather than a path
    pub given_content_not_path: bool,
    /// Write the result back to the input path; ignored for literal content
    pub write_to_file: bool,
    pub toc: TocOptions,
}

/// Load a document, refresh its TOC and optionally write it back.
///
/// The updated text is always returned.
pub fn update_document(input: &str, options: &RewriteOptions) -> BoxResult<String> {
    let content = if options.given_content_not_path {
        input.to_string()
    } else {
        debug!("Reading {}", input);
        fs::read_file(input)?
    };

    let updated = write_toc(&content, &options.toc);

    if options.write_to_file && !options.given_content_not_path {
        fs::write_file(input, &updated)?;
        info!("Wrote table of contents to {}", input);
    }

    Ok(updated)
}

/// Put a freshly rendered TOC block into the document.
///
/// An existing sentinel block is replaced in place. Otherwise the block is
/// inserted below the first `# ` heading, followed by a horizontal rule.
/// Without either, the text comes back unchanged. Running this on its own
/// output changes nothing.
pub fn write_toc(document: &str, options: &TocOptions) -> String {
    let options = TocOptions {
        include_begin_end_comment: true,
        ..options.clone()
    };
    let toc = generate_toc(&extract_toc(document), &options);

    if let Some(updated) = replace_existing_toc(document, &toc) {
        return updated;
    }

    if let Some(updated) = insert_below_title(document, &toc) {
        return updated;
    }

    debug!("No TOC block or top-level heading found, document left unchanged");
    document.to_string()
}

/// A line of the document and the byte offset it starts at
struct Line<'a> {
    start: usize,
    text: &'a str,
}

impl Line<'_> {
    fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

fn split_lines(document: &str) -> Vec<Line<'_>> {
    let mut start = 0;
    document
        .split('\n')
        .map(|text| {
            let line = Line { start, text };
            start += text.len() + 1;
            line
        })
        .collect()
}

/// Line index pairs of every sentinel block with a blank line on both sides
/// and no blank line inside.
fn find_toc_blocks(lines: &[Line<'_>]) -> Vec<(usize, usize)> {
    let mut blocks = Vec::new();
    let mut i = 1;

    while i < lines.len() {
        if lines[i].text == TOC_BEGIN_COMMENT && lines[i - 1].text.is_empty() {
            if let Some(end) = find_block_end(lines, i) {
                blocks.push((i, end));
                i = end + 1;
                continue;
            }
        }
        i += 1;
    }

    blocks
}

fn find_block_end(lines: &[Line<'_>], begin: usize) -> Option<usize> {
    for j in begin + 1..lines.len() {
        let text = lines[j].text;
        if text == TOC_END_COMMENT && followed_by_blank_line(lines, j) {
            return Some(j);
        }
        if text.is_empty() {
            return None;
        }
    }
    None
}

/// The next line is empty and is itself terminated by a newline
fn followed_by_blank_line(lines: &[Line<'_>], index: usize) -> bool {
    index + 2 < lines.len() && lines[index + 1].text.is_empty()
}

fn replace_existing_toc(document: &str, toc: &str) -> Option<String> {
    let lines = split_lines(document);
    let blocks = find_toc_blocks(&lines);
    if blocks.is_empty() {
        return None;
    }

    let mut output = String::with_capacity(document.len() + toc.len());
    let mut copied = 0;
    for (begin, end) in blocks {
        debug!("Replacing TOC block on lines {}-{}", begin + 1, end + 1);
        output.push_str(&document[copied..lines[begin].start]);
        output.push_str(toc);
        copied = lines[end].end();
    }
    output.push_str(&document[copied..]);

    Some(output)
}

fn insert_below_title(document: &str, toc: &str) -> Option<String> {
    let lines = split_lines(document);
    let title = lines
        .iter()
        .find(|line| line.text.len() > 2 && line.text.starts_with("# "))?;

    debug!("Inserting TOC below title '{}'", &title.text[2..]);
    let at = title.end();
    Some(format!(
        "{}\n\n{}\n\n{}{}",
        &document[..at],
        toc,
        HORIZONTAL_RULE,
        &document[at..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(document: &str) -> String {
        write_toc(document, &TocOptions::default())
    }

    #[test]
    fn test_insert_below_first_title() {
        let document = "# Title\n\nIntro text.\n\n## Setup\n\n## Usage\n";
        let expected = "\
# Title

<!-- GMT TOC BEGIN -->
- [Setup](#setup)
- [Usage](#usage)
<!-- GMT TOC END -->

---

Intro text.

## Setup

## Usage
";
        assert_eq!(rewrite(document), expected);
    }

    #[test]
    fn test_only_first_title_gets_a_toc() {
        let updated = rewrite("# One\n## A\n# Two\n## B\n");
        assert_eq!(updated.matches(TOC_BEGIN_COMMENT).count(), 1);
        assert!(updated.starts_with("# One\n\n<!-- GMT TOC BEGIN -->\n"));
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let documents = [
            "# Title\n## Intro\n## Intro\n### Details\n",
            "# Title",
            "Preface\n# Title\n\nText\n## A\n#### B\n",
            "# A & B\n## C\n",
            "no headings at all\n",
            "",
        ];
        for document in documents {
            let once = rewrite(document);
            assert_eq!(rewrite(&once), once, "document: {:?}", document);
        }
    }

    #[test]
    fn test_existing_block_is_replaced_in_place() {
        let document = "\
Some preface.

<!-- GMT TOC BEGIN -->
- [Old](#old)
<!-- GMT TOC END -->

# Title
## New
";
        let expected = "\
Some preface.

<!-- GMT TOC BEGIN -->
- [New](#new)
<!-- GMT TOC END -->

# Title
## New
";
        assert_eq!(rewrite(document), expected);
    }

    #[test]
    fn test_placeholder_block_is_filled() {
        let document = "Intro\n\n<!-- GMT TOC BEGIN -->\n<!-- GMT TOC END -->\n\n## A\n";
        assert_eq!(
            rewrite(document),
            "Intro\n\n<!-- GMT TOC BEGIN -->\n- [A](#a)\n<!-- GMT TOC END -->\n\n## A\n"
        );
    }

    #[test]
    fn test_glued_block_is_not_recognized() {
        let document = "# Title\n<!-- GMT TOC BEGIN -->\n<!-- GMT TOC END -->\n\n## A\n";
        let updated = rewrite(document);

        assert_eq!(updated.matches(TOC_BEGIN_COMMENT).count(), 2);
        assert!(updated
            .starts_with("# Title\n\n<!-- GMT TOC BEGIN -->\n- [A](#a)\n<!-- GMT TOC END -->\n\n---\n"));
    }

    #[test]
    fn test_block_without_trailing_blank_line_is_not_recognized() {
        let document = "Text\n\n<!-- GMT TOC BEGIN -->\n<!-- GMT TOC END -->\n## A\n";
        assert_eq!(rewrite(document), document);
    }

    #[test]
    fn test_block_with_blank_line_inside_is_not_recognized() {
        let document = "# T\n\n<!-- GMT TOC BEGIN -->\n\n<!-- GMT TOC END -->\n\n## A\n";
        let updated = rewrite(document);
        assert!(updated
            .starts_with("# T\n\n<!-- GMT TOC BEGIN -->\n- [A](#a)\n<!-- GMT TOC END -->\n\n---\n"));
    }

    #[test]
    fn test_no_insertion_point() {
        let document = "## Only second level\n\ntext\n";
        assert_eq!(rewrite(document), document);
        assert_eq!(rewrite(""), "");
    }

    #[test]
    fn test_surrounding_text_is_preserved() {
        let document = "# T\r\nbody\twith tabs \n\n## Sub ✓\n";
        let updated = rewrite(document);
        assert!(updated.ends_with("\n---\nbody\twith tabs \n\n## Sub ✓\n"));
    }

    #[test]
    fn test_update_literal_content_never_persists() {
        let options = RewriteOptions {
            given_content_not_path: true,
            write_to_file: true,
            ..RewriteOptions::default()
        };
        let updated = update_document("# T\n## A\n", &options).unwrap();
        assert!(updated.contains("- [A](#a)"));
    }

    #[test]
    fn test_update_file_in_place() {
        let path = std::env::temp_dir()
            .join(format!("gen-md-toc-rewriter-{}.md", std::process::id()));
        std::fs::write(&path, "# Doc\n## Part\n").unwrap();
        let path_str = path.to_string_lossy().to_string();

        let options = RewriteOptions {
            write_to_file: true,
            ..RewriteOptions::default()
        };
        let updated = update_document(&path_str, &options).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), updated);
        assert_eq!(update_document(&path_str, &options).unwrap(), updated);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_update_crlf_file_replaces_existing_block() {
        let path = std::env::temp_dir()
            .join(format!("gen-md-toc-crlf-{}.md", std::process::id()));
        let document = "# Doc\r\n\r\n<!-- GMT TOC BEGIN -->\r\n- [Old](#old)\r\n<!-- GMT TOC END -->\r\n\r\n---\r\n\r\n## Part\r\n";
        std::fs::write(&path, document).unwrap();
        let path_str = path.to_string_lossy().to_string();

        let options = RewriteOptions {
            write_to_file: true,
            ..RewriteOptions::default()
        };
        let updated = update_document(&path_str, &options).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();

        assert_eq!(
            updated,
            "# Doc\n\n<!-- GMT TOC BEGIN -->\n- [Part](#part)\n<!-- GMT TOC END -->\n\n---\n\n## Part\n"
        );
        assert_eq!(on_disk, updated);
        assert_eq!(on_disk.matches(TOC_BEGIN_COMMENT).count(), 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_update_missing_file_fails() {
        let options = RewriteOptions::default();
        assert!(update_document("/definitely/not/here.md", &options).is_err());
    }
}
