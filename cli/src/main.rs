mod cli;
mod error;
mod exec;
mod logging;
mod mkdir;
mod notes;
mod pack;
mod progress;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Exec {
            command,
            error_message,
            silent,
            tolerate_failure,
            json,
        } => exec::execute(command, error_message, silent, tolerate_failure, json),
        Commands::Notes {
            release,
            dir,
            file,
            list,
        } => notes::execute(release, dir, file, list),
        Commands::Pack { source, output } => pack::execute(source, output),
        Commands::Mkdir { path, overwrite } => mkdir::execute(path, overwrite),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
