use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glassdeck")]
#[command(author, version, about)]
#[command(long_about = "A scroll-driven slide deck presenter.\n\n\
    Scroll, swipe or use the arrow keys to move between slides.\n\n\
    Examples:\n  \
    glassdeck deck.md              Present a deck (fullscreen)\n  \
    glassdeck deck.md --windowed   Present in a window\n  \
    glassdeck outline deck.md      List the slides of a deck")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Deck file to present
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slides of a deck without presenting it
    Outline {
        /// Deck file to inspect
        file: PathBuf,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.transition_ms)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Log filter implied by `-v`/`-q`, used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Outline { file }) => crate::commands::outline::run(&file, self.quiet),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::print_version();
                Ok(())
            }
            None => {
                if let Some(file) = self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                    crate::app::run(file, self.windowed, self.slide)
                } else {
                    use clap::CommandFactory;
                    let mut cmd = Self::command();
                    cmd.print_help()?;
                    println!();
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_present_flags() {
        let cli = Cli::try_parse_from(["glassdeck", "deck.md", "--windowed", "--slide", "3"])
            .expect("valid args");
        assert_eq!(cli.file, Some(PathBuf::from("deck.md")));
        assert!(cli.windowed);
        assert_eq!(cli.slide, Some(3));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_log_level_from_flags() {
        let cli = Cli::try_parse_from(["glassdeck", "-vv", "version"]).expect("valid args");
        assert_eq!(cli.log_level(), "trace");
        let cli = Cli::try_parse_from(["glassdeck", "-q", "version"]).expect("valid args");
        assert_eq!(cli.log_level(), "error");
        let cli = Cli::try_parse_from(["glassdeck", "version"]).expect("valid args");
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_config_set_subcommand() {
        let cli = Cli::try_parse_from(["glassdeck", "config", "set", "defaults.theme", "light"])
            .expect("valid args");
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Set { .. }
            })
        ));
    }
}
