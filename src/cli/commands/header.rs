use log::debug;

use gen_md_toc::{BoxResult, MarkdownStructure};

use crate::cli::commands::read_input;
use crate::cli::types::{Commands, HeaderFormat};

/// Handle the header command
pub fn handle_header_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Header { input, content, format } = command {
        let document = read_input(input, *content)?;
        let structure = MarkdownStructure::parse(&document)?;
        debug!("Top-level headings: {:?}", structure.titles());

        let rendered = match format {
            HeaderFormat::Json => serde_json::to_string_pretty(&structure.file_header)?,
            HeaderFormat::Yaml => serde_yaml::to_string(&structure.file_header)?,
        };
        println!("{}", rendered.trim_end());
    }
    Ok(())
}
