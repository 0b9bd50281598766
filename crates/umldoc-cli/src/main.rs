//! umldoc CLI - Render UML class diagrams from an entity model

mod cli;

use clap::Parser;

fn main() {
    // Logging is initialized in run() from the parsed flags
    let cli_args = cli::Cli::parse();

    let mut app = cli::UmldocApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
