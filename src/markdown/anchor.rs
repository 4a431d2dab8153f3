use serde::{Deserialize, Serialize};

/// How heading text is turned into an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationStyle {
    /// GitHub style anchors, spaces become `-`
    #[default]
    Markdown,
    Hyphen,
    Underscore,
    Dot,
}

impl NormalizationStyle {
    pub fn separator(self) -> char {
        match self {
            NormalizationStyle::Markdown | NormalizationStyle::Hyphen => '-',
            NormalizationStyle::Underscore => '_',
            NormalizationStyle::Dot => '.',
        }
    }

    /// Every style except Markdown also keeps `.`
    fn widens_valid_chars(self) -> bool {
        self != NormalizationStyle::Markdown
    }
}

/// Characters kept in a Markdown anchor: ASCII word characters, CJK unified
/// ideographs (U+4E00..=U+9FFF), space and hyphen.
pub fn is_markdown_anchor_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || c == ' '
        || c == '-'
}

/// Normalize text into an anchor.
///
/// Spaces are replaced by the style separator first, then every character
/// rejected by `valid_char` is dropped, then `case_converter` runs on the
/// result. Non-Markdown styles additionally keep `.` and their separator.
pub fn normalize<C, V>(
    text: &str,
    style: NormalizationStyle,
    case_converter: C,
    valid_char: V,
) -> String
where
    C: Fn(&str) -> String,
    V: Fn(char) -> bool,
{
    let separator = style.separator();
    let widened = style.widens_valid_chars();

    let kept: String = text
        .chars()
        .map(|c| if c == ' ' { separator } else { c })
        .filter(|&c| valid_char(c) || (widened && (c == '.' || c == separator)))
        .collect();

    case_converter(&kept)
}

/// Normalize with the default lowercase conversion and Markdown character set
pub fn normalize_with_style(text: &str, style: NormalizationStyle) -> String {
    normalize(text, style, str::to_lowercase, is_markdown_anchor_char)
}

/// GitHub style anchor for heading text
pub fn normalize_anchor(text: &str) -> String {
    normalize_with_style(text, NormalizationStyle::Markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_anchor() {
        assert_eq!(normalize_anchor("Hello World!"), "hello-world");
        assert_eq!(normalize_anchor("Getting_Started"), "getting_started");
    }

    #[test]
    fn test_spaces_replaced_before_punctuation_removed() {
        assert_eq!(normalize_anchor("A & B"), "a--b");
    }

    #[test]
    fn test_cjk_kept_and_cjk_punctuation_removed() {
        assert_eq!(normalize_anchor("安装 指南，第一步"), "安装-指南第一步");
    }

    #[test]
    fn test_non_ascii_letters_removed() {
        assert_eq!(normalize_anchor("Café Menu"), "caf-menu");
    }

    #[test]
    fn test_markdown_style_drops_dots() {
        assert_eq!(normalize_anchor("v1.2 Notes"), "v12-notes");
    }

    #[test]
    fn test_other_styles_keep_dots() {
        assert_eq!(normalize_with_style("v1.2 Notes", NormalizationStyle::Hyphen), "v1.2-notes");
        assert_eq!(normalize_with_style("v1.2 Notes", NormalizationStyle::Underscore), "v1.2_notes");
        assert_eq!(normalize_with_style("v1.2 Notes!", NormalizationStyle::Dot), "v1.2.notes");
    }

    #[test]
    fn test_custom_case_converter_and_charset() {
        let anchor = normalize(
            "Mixed Case 42",
            NormalizationStyle::Underscore,
            |s| s.to_uppercase(),
            |c| c.is_ascii_alphabetic(),
        );
        assert_eq!(anchor, "MIXED_CASE_");
    }

    #[test]
    fn test_empty_when_nothing_valid() {
        assert_eq!(normalize_anchor("!!!"), "");
        assert_eq!(normalize_anchor(""), "");
    }
}
