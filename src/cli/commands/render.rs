use std::path::PathBuf;

use gen_md_toc::{extract_toc, generate_toc, BoxResult, TocOptions};

use crate::cli::commands::{read_input, resolve_config};
use crate::cli::types::Commands;

/// Handle the render command
pub fn handle_render_command(command: &Commands, config_file: Option<&PathBuf>) -> BoxResult<()> {
    if let Commands::Render { input, content, sentinels, toc } = command {
        let config = resolve_config(config_file, toc)?;
        let document = read_input(input, *content)?;

        let options = TocOptions {
            include_begin_end_comment: *sentinels,
            ..config.toc_options()
        };
        println!("{}", generate_toc(&extract_toc(&document), &options));
    }
    Ok(())
}
