//! Export Registry - interactive registration shell
//!
//! Console front end over the registry core: registers shipments for the
//! session and prints the general and grouped reports.

mod menu;
mod report;

use clap::Parser;

/// Interactive console for the export registry.
#[derive(Parser)]
#[command(name = "export-registry", version, about)]
struct Cli {
    /// Emit the grouped report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = menu::run(cli.json) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
