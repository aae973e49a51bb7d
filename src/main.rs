use clap::Parser;
use podlint::{cli::Cli, handlers};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    let config = cli.lint_config();
    if let Err(e) = handlers::handle_validate(&cli.path, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
