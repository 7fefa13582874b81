pub mod completion;
pub mod config;
pub mod outline;

use colored::Colorize;

pub fn print_version() {
    println!(
        "{} {}",
        "glassdeck".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", env!("CARGO_PKG_DESCRIPTION").dimmed());
}
