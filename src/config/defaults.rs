use crate::markdown::anchor::NormalizationStyle;

/// Configuration file names to look for, in order
pub const CONFIG_FILES: [&str; 4] = [
    ".gmt-toc.yml",
    ".gmt-toc.yaml",
    ".gmt-toc.toml",
    ".gmt-toc.json",
];

/// Default list bullet
pub fn default_bullet_char() -> char {
    '-'
}

/// Default columns per nesting level
pub fn default_indentation() -> usize {
    2
}

/// Default indentation fill
pub fn default_indentation_char() -> char {
    ' '
}

/// Level-1 headings are left out by default
pub fn default_include_title() -> bool {
    false
}

/// Default anchor style
pub fn default_style() -> NormalizationStyle {
    NormalizationStyle::Markdown
}
