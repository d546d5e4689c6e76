//! chiton: lowest-risk route finder for chiton risk maps.

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use cli::{CLIArgs, Command};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    logging::init(args.verbose);

    match args.command {
        Command::Solve {
            input_path,
            selection,
            part,
            show_path,
        } => commands::solve(&input_path, selection.into(), part, show_path),
        Command::CrossCheck {
            count,
            max_size,
            seed,
        } => commands::cross_check(count, max_size, seed),
    }
}
