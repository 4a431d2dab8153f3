use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::markdown::anchor::NormalizationStyle;
use crate::markdown::toc::TocOptions;

/// TOC configuration, as read from a `.gmt-toc.*` file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Character starting each list entry
    #[serde(default = "defaults::default_bullet_char")]
    pub bullet_char: char,

    /// Columns per nesting level
    #[serde(default = "defaults::default_indentation")]
    pub indentation: usize,

    /// Character used to fill the indentation
    #[serde(default = "defaults::default_indentation_char")]
    pub indentation_char: char,

    /// Render level-1 headings too
    #[serde(default = "defaults::default_include_title")]
    pub include_title: bool,

    /// Caption bullet shown above the entries when titles are excluded
    #[serde(default)]
    pub toc_title: Option<String>,

    /// Anchor style for the generated links
    #[serde(default = "defaults::default_style")]
    pub style: NormalizationStyle,
}

impl Default for TocConfig {
    fn default() -> Self {
        TocConfig {
            bullet_char: defaults::default_bullet_char(),
            indentation: defaults::default_indentation(),
            indentation_char: defaults::default_indentation_char(),
            include_title: defaults::default_include_title(),
            toc_title: None,
            style: defaults::default_style(),
        }
    }
}

impl TocConfig {
    /// Rendering options for this configuration, without sentinels
    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            include_begin_end_comment: false,
            include_title: self.include_title,
            toc_title: self.toc_title.clone(),
            bullet_char: self.bullet_char,
            indentation: self.indentation,
            indentation_char: self.indentation_char,
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_toc_options() {
        assert_eq!(TocConfig::default().toc_options(), TocOptions::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: TocConfig = serde_yaml::from_str("indentation: 4\nstyle: underscore\n").unwrap();
        assert_eq!(config.indentation, 4);
        assert_eq!(config.style, NormalizationStyle::Underscore);
        assert_eq!(config.bullet_char, '-');
        assert!(!config.include_title);
    }
}
