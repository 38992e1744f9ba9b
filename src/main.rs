mod catalog;
mod cli;
mod commands;
mod config;
mod controller;
mod element;
mod env;
mod error;
mod filter;
mod form;
mod logging;
mod output;
mod page;
mod theme;
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.log_target());

    if let Err(err) = commands::dispatch(cli) {
        tracing::debug!(error = %err, "command failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
