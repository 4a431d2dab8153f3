pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config_file = cli.config.as_ref();
    let result = match &cli.command {
        types::Commands::Toc { .. } => commands::handle_toc_command(&cli.command, config_file),
        types::Commands::Render { .. } => commands::handle_render_command(&cli.command, config_file),
        types::Commands::Tree { .. } => commands::handle_tree_command(&cli.command),
        types::Commands::Header { .. } => commands::handle_header_command(&cli.command),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
