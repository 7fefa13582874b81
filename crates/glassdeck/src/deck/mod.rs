pub mod blocks;
pub mod frontmatter;
pub mod splitter;

use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Deck {
    pub meta: DeckMeta,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Slide {
    pub blocks: Vec<Block>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    /// A frosted panel with an optional title.
    Card { title: Option<String>, body: String },
    /// A run of `- item` lines, drawn as chips.
    Skills { items: Vec<String> },
    /// A standalone `[label](url)` line, drawn as a button.
    Link { label: String, url: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    /// Headings with at most a short tagline and buttons, centered.
    Hero,
    /// Two or more cards, laid out side by side.
    Cards,
    Content,
}

impl Slide {
    /// First heading text, used for outlines and window titles.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of elements that react to the cursor.
    pub fn interactive_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|b| match b {
                Block::Card { .. } | Block::Link { .. } => 1,
                Block::Skills { items } => items.len(),
                _ => 0,
            })
            .sum()
    }
}

pub fn parse(content: &str) -> Deck {
    let (meta, body) = frontmatter::extract(content);
    let slides = splitter::split(&body)
        .into_iter()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            let blocks = blocks::parse(&raw);
            let layout = classify_layout(&blocks);
            Slide { blocks, layout }
        })
        .collect();
    Deck { meta, slides }
}

const SHORT_PARAGRAPH: usize = 120;

fn classify_layout(blocks: &[Block]) -> Layout {
    let mut headings = 0;
    let mut paragraphs = 0;
    let mut short_paragraphs = 0;
    let mut cards = 0;
    let mut skills = 0;

    for block in blocks {
        match block {
            Block::Heading { .. } => headings += 1,
            Block::Paragraph { text } => {
                paragraphs += 1;
                if text.chars().count() < SHORT_PARAGRAPH {
                    short_paragraphs += 1;
                }
            }
            Block::Card { .. } => cards += 1,
            Block::Skills { .. } => skills += 1,
            Block::Link { .. } => {}
        }
    }

    if cards >= 2 {
        return Layout::Cards;
    }

    if headings > 0
        && cards == 0
        && skills == 0
        && paragraphs <= 1
        && short_paragraphs == paragraphs
    {
        return Layout::Hero;
    }

    Layout::Content
}
