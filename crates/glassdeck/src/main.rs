mod app;
mod cli;
mod commands;
mod config;
mod controller;
mod cursor;
mod deck;
mod input;
mod render;
mod surface;
mod theme;
mod timer;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("glassdeck={default_level}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing(cli.log_level());

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
