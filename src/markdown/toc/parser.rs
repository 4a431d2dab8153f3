use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::types::{HeadingRecord, TocTree};
use crate::tree::Tree;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"(?m)^(#{1,6}) (.+)$").unwrap();
}

/// Extract `(level, content)` pairs for every ATX heading, in document order.
///
/// Lines inside a metadata header block are scanned like any other line.
pub fn extract_headings(markdown: &str) -> Vec<(u8, String)> {
    HEADING_REGEX
        .captures_iter(markdown)
        .map(|cap| (cap[1].len() as u8, cap[2].trim().to_string()))
        .collect()
}

/// Attach a serial to each heading: the n-th occurrence of a given text
/// (at any level) gets serial n, counting from zero.
pub fn assign_serials(headings: Vec<(u8, String)>) -> Vec<HeadingRecord> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    headings
        .into_iter()
        .map(|(level, content)| {
            let counter = seen.entry(content.clone()).or_insert(0);
            let serial = *counter;
            *counter += 1;
            HeadingRecord::new(level, content, serial)
        })
        .collect()
}

/// Build the heading hierarchy of a Markdown document.
///
/// The returned root holds [`HeadingRecord::root`]; every heading of the
/// document appears exactly once below it, children in document order.
pub fn extract_toc(markdown: &str) -> TocTree {
    let records = assign_serials(extract_headings(markdown));
    log::debug!("Found {} headings", records.len());

    let (branches, consumed) = assemble(&records, 0, 0);
    debug_assert_eq!(consumed, records.len());

    Tree::with_branches(HeadingRecord::root(), branches)
}

/// Collect the subtrees owned by a node of level `parent_level`, starting at
/// `cursor`. Returns the subtrees and the index of the first record that
/// belongs to an ancestor.
///
/// The first record fixes the sibling level. A deeper record is folded into
/// the previous sibling whatever the jump in levels, so `#` directly followed
/// by `####` nests one step, not three. A shallower record that is still
/// deeper than `parent_level` becomes the new sibling level.
fn assemble(records: &[HeadingRecord], mut cursor: usize, parent_level: u8) -> (Vec<TocTree>, usize) {
    let mut branches: Vec<TocTree> = Vec::new();
    let mut sibling_level: Option<u8> = None;

    while let Some(record) = records.get(cursor) {
        if record.level <= parent_level {
            break;
        }

        match sibling_level {
            Some(level) if record.level > level => {
                let (children, next) = assemble(records, cursor, level);
                if let Some(previous) = branches.last_mut() {
                    previous.branches.extend(children);
                }
                cursor = next;
            }
            _ => {
                sibling_level = Some(record.level);
                branches.push(Tree::new(record.clone()));
                cursor += 1;
            }
        }
    }

    (branches, cursor)
}
