use log::info;
use std::path::PathBuf;

use gen_md_toc::{update_document, BoxResult, RewriteOptions};

use crate::cli::commands::resolve_config;
use crate::cli::types::Commands;

/// Handle the toc command
pub fn handle_toc_command(command: &Commands, config_file: Option<&PathBuf>) -> BoxResult<()> {
    if let Commands::Toc { input, content, write, toc } = command {
        let config = resolve_config(config_file, toc)?;

        if *write && *content {
            info!("Literal content is never written back, printing the result instead");
        }

        let options = RewriteOptions {
            given_content_not_path: *content,
            write_to_file: *write,
            toc: config.toc_options(),
        };
        let updated = update_document(input, &options)?;

        if !*write || *content {
            print!("{}", updated);
        }
    }
    Ok(())
}
