use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::deck::{self, Layout};

pub fn run(file: &Path, quiet: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let deck = deck::parse(&content);

    if deck.slides.is_empty() {
        anyhow::bail!("No slides found in {}", file.display());
    }

    if !quiet {
        let title = deck.meta.title.as_deref().unwrap_or("Untitled deck");
        match deck.meta.author.as_deref() {
            Some(author) => println!("{} {}", title.bold(), format!("by {author}").dimmed()),
            None => println!("{}", title.bold()),
        }
        println!();
    }

    let width = deck.slides.len().to_string().len();
    for (i, slide) in deck.slides.iter().enumerate() {
        let layout = match slide.layout {
            Layout::Hero => "hero",
            Layout::Cards => "cards",
            Layout::Content => "content",
        };
        let interactive = slide.interactive_count();
        let detail = if interactive > 0 {
            format!("{layout}, {interactive} interactive")
        } else {
            layout.to_string()
        };
        println!(
            "{:>width$}. {} {}",
            i + 1,
            slide.title().unwrap_or("(untitled)"),
            format!("[{detail}]").dimmed(),
        );
    }
    Ok(())
}
