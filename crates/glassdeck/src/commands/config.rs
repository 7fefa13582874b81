use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let settings = config.controller_settings();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("  {}", "(not created yet, showing defaults)".dimmed());
    }
    println!();
    println!("{}", "Effective values:".bold());
    println!(
        "  defaults.theme            {}",
        config.theme().unwrap_or("dark (from deck or built-in)").cyan()
    );
    println!(
        "  defaults.transition_ms    {}",
        settings.transition.as_millis().to_string().cyan()
    );
    println!(
        "  defaults.swipe_threshold  {}",
        settings.swipe_threshold.to_string().cyan()
    );
    println!(
        "  defaults.cursor_trail_ms  {}",
        settings.cursor_trail.as_millis().to_string().cyan()
    );
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display()
    );
    Ok(())
}
