mod header;
mod render;
mod toc;
mod tree;

pub use header::handle_header_command;
pub use render::handle_render_command;
pub use toc::handle_toc_command;
pub use tree::handle_tree_command;

use log::debug;
use std::path::PathBuf;

use gen_md_toc::config::{self, TocConfig};
use gen_md_toc::utils::fs;
use gen_md_toc::BoxResult;

use crate::cli::types::TocArgs;

/// Read the document named by `input`, or take `input` as the document itself
fn read_input(input: &str, content: bool) -> BoxResult<String> {
    if content {
        Ok(input.to_string())
    } else {
        debug!("Reading {}", input);
        fs::read_file(input)
    }
}

/// Load the configuration file and apply command line overrides on top
fn resolve_config(config_file: Option<&PathBuf>, overrides: &TocArgs) -> BoxResult<TocConfig> {
    let mut config = config::load_config(PathBuf::from("."), config_file.cloned())?;
    overrides.apply(&mut config);
    config::validate_config(&config)?;
    Ok(config)
}
