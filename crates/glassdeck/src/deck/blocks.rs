use std::sync::LazyLock;

use regex::Regex;

use super::Block;

static LINK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]]+)\]\(([^)\s]+)\)$").expect("link pattern is valid")
});

/// Parse one slide's raw text into blocks.
pub fn parse(raw: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut skills: Vec<String> = Vec::new();
    let mut lines = raw.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim();

        if trimmed == "-" || trimmed.starts_with("- ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            let item = trimmed[1..].trim();
            if !item.is_empty() {
                skills.push(item.to_string());
            }
            continue;
        }
        flush_skills(&mut skills, &mut blocks);

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        if let Some(header) = trimmed.strip_prefix(":::") {
            flush_paragraph(&mut paragraph, &mut blocks);
            let title = card_title(header);
            let mut body: Vec<&str> = Vec::new();
            for inner in lines.by_ref() {
                if inner.trim() == ":::" {
                    break;
                }
                body.push(inner.trim());
            }
            blocks.push(Block::Card {
                title,
                body: body.join("\n").trim().to_string(),
            });
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
            continue;
        }

        if let Some(caps) = LINK_LINE.captures(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Link {
                label: caps[1].trim().to_string(),
                url: caps[2].to_string(),
            });
            continue;
        }

        paragraph.push(trimmed);
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    flush_skills(&mut skills, &mut blocks);
    blocks
}

/// `#`, `##` or `###` followed by a space. Deeper levels are plain text.
fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if !(1..=3).contains(&level) {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?.trim();
    if text.is_empty() {
        return None;
    }
    Some((level as u8, text))
}

/// `:::card Title` → Some("Title"); `:::card` or `:::` → None.
fn card_title(header: &str) -> Option<String> {
    let rest = header.trim();
    let rest = rest.strip_prefix("card").unwrap_or(rest).trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if lines.is_empty() {
        return;
    }
    blocks.push(Block::Paragraph {
        text: lines.join(" "),
    });
    lines.clear();
}

fn flush_skills(items: &mut Vec<String>, blocks: &mut Vec<Block>) {
    if items.is_empty() {
        return;
    }
    blocks.push(Block::Skills {
        items: std::mem::take(items),
    });
}
