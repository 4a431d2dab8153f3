use gen_md_toc::{extract_toc, BoxResult};

use crate::cli::commands::read_input;
use crate::cli::types::Commands;

/// Handle the tree command
pub fn handle_tree_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Tree { input, content } = command {
        let document = read_input(input, *content)?;
        print!("{}", extract_toc(&document));
    }
    Ok(())
}
