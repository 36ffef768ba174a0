//! Parking Garage - track vehicles in a fixed-capacity garage
//!
//! Interactive console front end over the garage session.

use clap::Parser;
use garage_cli::cli::Cli;
use garage_cli::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
