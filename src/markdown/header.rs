use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::types::{FileHeaderMap, HeaderValue};
use crate::utils::error::TocError;

/// First line of the metadata header block
pub const FILE_HEADER_BEGIN_COMMENT: &str = "<!-- metadata header ---";
/// Last line of the metadata header block
pub const FILE_HEADER_END_COMMENT: &str = "---- metadata header -->";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

lazy_static! {
    static ref FILE_HEADER_REGEX: Regex = Regex::new(&format!(
        r"(?m)^{}\n(?:.+\n)*?{}$",
        regex::escape(FILE_HEADER_BEGIN_COMMENT),
        regex::escape(FILE_HEADER_END_COMMENT),
    ))
    .unwrap();

    static ref DATA_PAIR_REGEX: Regex = Regex::new(r"^ *(.+?) *: *(.*?) *$").unwrap();
}

/// Read the `key : value` pairs of the first metadata header block.
///
/// A document without a block yields an empty map. One uninterpretable
/// value fails the whole call.
pub fn extract_file_header(markdown: &str) -> Result<FileHeaderMap, TocError> {
    let mut header = FileHeaderMap::new();

    let block = match FILE_HEADER_REGEX.find(markdown) {
        Some(m) => m.as_str(),
        None => return Ok(header),
    };

    for line in block.lines() {
        if let Some(cap) = DATA_PAIR_REGEX.captures(line) {
            let key = cap[1].to_string();
            let value = parse_value(&key, &cap[2])?;
            header.insert(key, value);
        }
    }

    log::debug!("Metadata header has {} entries", header.len());
    Ok(header)
}

fn parse_value(key: &str, value: &str) -> Result<HeaderValue, TocError> {
    if value.is_empty() {
        return Ok(HeaderValue::Empty);
    }

    if key.contains("time") {
        return parse_timestamp(key, value).map(HeaderValue::Timestamp);
    }

    if value.contains(',') {
        let tokens = value
            .split(',')
            .map(|token| token.trim_matches(' '))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        return Ok(HeaderValue::List(tokens));
    }

    Err(TocError::Metadata(format!(
        "value of '{}' is neither a timestamp nor a comma separated list: {}",
        key, value
    )))
}

/// `1970-01-01 00:00:00 Z`, always in UTC
fn parse_timestamp(key: &str, value: &str) -> Result<DateTime<Utc>, TocError> {
    let stamp = value
        .strip_suffix('Z')
        .ok_or_else(|| TocError::Metadata(format!("timestamp of '{}' not in UTC: {}", key, value)))?
        .trim_end();

    let naive = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).map_err(|e| {
        TocError::Metadata(format!("invalid timestamp for '{}': {} ({})", key, value, e))
    })?;

    Ok(Utc.from_utc_datetime(&naive))
}
