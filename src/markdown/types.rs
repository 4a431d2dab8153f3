use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tree::Tree;

/// Payload of the synthetic root node of every TOC tree
pub const TOC_ROOT_CONTENT: &str = "Table of Contents";

/// One ATX heading found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    /// Number of leading `#` marks, 1 to 6 (0 for the synthetic root)
    pub level: u8,
    /// Trimmed heading text
    pub content: String,
    /// Zero-based occurrence index of this exact text in the document
    pub serial: usize,
}

impl HeadingRecord {
    pub fn new(level: u8, content: impl Into<String>, serial: usize) -> Self {
        Self {
            level,
            content: content.into(),
            serial,
        }
    }

    /// The placeholder payload held by the root of a TOC tree
    pub fn root() -> Self {
        Self::new(0, TOC_ROOT_CONTENT, 0)
    }
}

impl fmt::Display for HeadingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.level == 0 {
            return write!(f, "{}", self.content);
        }
        write!(f, "{} {}", "#".repeat(self.level as usize), self.content)?;
        if self.serial > 0 {
            write!(f, " ({})", self.serial)?;
        }
        Ok(())
    }
}

/// Heading hierarchy of a document, rooted at [`HeadingRecord::root`]
pub type TocTree = Tree<HeadingRecord>;

/// A value from the metadata header block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderValue {
    /// `YYYY-MM-DD HH:MM:SS Z`, always UTC
    Timestamp(DateTime<Utc>),
    /// Comma separated tokens, trimmed, empty ones dropped
    List(Vec<String>),
    /// Key present with no value
    Empty,
}

/// Key to value mapping read from the metadata header block
pub type FileHeaderMap = BTreeMap<String, HeaderValue>;
