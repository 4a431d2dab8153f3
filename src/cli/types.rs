use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gen_md_toc::config::TocConfig;
use gen_md_toc::NormalizationStyle;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "gen-md-toc")]
#[command(about = "Generate and refresh the table of contents of Markdown documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./.gmt-toc.{yml,yaml,toml,json})
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Insert or refresh the table of contents of a document
    #[command(alias = "t")]
    Toc {
        /// Markdown file, or the document itself with --content
        input: String,

        /// Treat INPUT as the document text instead of a path
        #[arg(long, default_value_t = false)]
        content: bool,

        /// Write the result back to the file instead of printing it
        #[arg(short = 'w', long, default_value_t = false)]
        write: bool,

        #[command(flatten)]
        toc: TocArgs,
    },

    /// Print only the table of contents
    #[command(alias = "r")]
    Render {
        /// Markdown file, or the document itself with --content
        input: String,

        /// Treat INPUT as the document text instead of a path
        #[arg(long, default_value_t = false)]
        content: bool,

        /// Wrap the list in the TOC begin/end comments
        #[arg(short = 's', long, default_value_t = false)]
        sentinels: bool,

        #[command(flatten)]
        toc: TocArgs,
    },

    /// Print the heading hierarchy of a document
    Tree {
        /// Markdown file, or the document itself with --content
        input: String,

        /// Treat INPUT as the document text instead of a path
        #[arg(long, default_value_t = false)]
        content: bool,
    },

    /// Print the metadata header block of a document
    Header {
        /// Markdown file, or the document itself with --content
        input: String,

        /// Treat INPUT as the document text instead of a path
        #[arg(long, default_value_t = false)]
        content: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = HeaderFormat::Json)]
        format: HeaderFormat,
    },
}

/// TOC options that override the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct TocArgs {
    /// Render level-1 headings too
    #[arg(long, default_value_t = false)]
    pub include_title: bool,

    /// List bullet character
    #[arg(short, long, value_name = "CHAR")]
    pub bullet: Option<char>,

    /// Columns per nesting level
    #[arg(short, long, value_name = "N")]
    pub indent: Option<usize>,

    /// Caption bullet placed above the entries
    #[arg(long, value_name = "TEXT")]
    pub toc_title: Option<String>,

    /// Anchor style
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,
}

impl TocArgs {
    /// Apply the flags given on the command line to a loaded configuration
    pub fn apply(&self, config: &mut TocConfig) {
        if self.include_title {
            config.include_title = true;
        }
        if let Some(bullet) = self.bullet {
            config.bullet_char = bullet;
        }
        if let Some(indent) = self.indent {
            config.indentation = indent;
        }
        if let Some(caption) = &self.toc_title {
            config.toc_title = Some(caption.clone());
        }
        if let Some(style) = self.style {
            config.style = style.into();
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    Markdown,
    Hyphen,
    Underscore,
    Dot,
}

impl From<StyleArg> for NormalizationStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Markdown => NormalizationStyle::Markdown,
            StyleArg::Hyphen => NormalizationStyle::Hyphen,
            StyleArg::Underscore => NormalizationStyle::Underscore,
            StyleArg::Dot => NormalizationStyle::Dot,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toc_command() {
        let cli = Cli::try_parse_from([
            "gen-md-toc", "toc", "README.md", "-w", "--bullet", "*", "--style", "underscore", "-g",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Commands::Toc { input, content, write, toc } => {
                assert_eq!(input, "README.md");
                assert!(!content);
                assert!(write);

                let mut config = TocConfig::default();
                toc.apply(&mut config);
                assert_eq!(config.bullet_char, '*');
                assert_eq!(config.style, NormalizationStyle::Underscore);
                assert_eq!(config.indentation, 2);
            }
            _ => panic!("expected toc command"),
        }
    }

    #[test]
    fn test_parse_header_command() {
        let cli = Cli::try_parse_from(["gen-md-toc", "header", "--content", "# x", "--format", "yaml"]).unwrap();
        match cli.command {
            Commands::Header { content, format, .. } => {
                assert!(content);
                assert_eq!(format, HeaderFormat::Yaml);
            }
            _ => panic!("expected header command"),
        }
    }
}
