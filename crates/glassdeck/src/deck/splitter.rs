/// Split a deck body (after frontmatter extraction) into raw slide strings.
///
/// Three things end a slide:
/// 1. A `---` line with a blank line (or the document edge) on both sides
/// 2. Three or more consecutive blank lines
/// 3. A `# ` heading when the current slide already has content
///
/// None of them apply inside a `:::card` fence.
pub fn split(body: &str) -> Vec<String> {
    let body = body.replace("\r\n", "\n");
    let lines: Vec<&str> = body.lines().collect();

    let mut slides: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut blank_run = 0;
    let mut in_fence = false;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run == 3 && !in_fence {
                flush(&mut current, &mut slides);
            } else {
                current.push(line);
            }
            continue;
        }
        blank_run = 0;

        if !in_fence && is_dash_separator(trimmed) {
            let prev_blank = i == 0 || lines[i - 1].trim().is_empty();
            let next_blank = lines.get(i + 1).is_none_or(|l| l.trim().is_empty());
            if prev_blank && next_blank {
                flush(&mut current, &mut slides);
                continue;
            }
        }

        if trimmed.starts_with(":::") {
            if in_fence {
                in_fence = trimmed != ":::";
            } else {
                in_fence = true;
            }
        } else if !in_fence && line.starts_with("# ") && has_content(&current) {
            flush(&mut current, &mut slides);
        }

        current.push(line);
    }

    flush(&mut current, &mut slides);
    slides
}

fn flush(current: &mut Vec<&str>, slides: &mut Vec<String>) {
    let text = current.join("\n").trim().to_string();
    if !text.is_empty() {
        slides.push(text);
    }
    current.clear();
}

fn has_content(lines: &[&str]) -> bool {
    lines.iter().any(|l| !l.trim().is_empty())
}

fn is_dash_separator(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_separator() {
        let slides = split("Slide one\n\n---\n\nSlide two");
        assert_eq!(slides, vec!["Slide one", "Slide two"]);
    }

    #[test]
    fn test_dash_without_blank_lines_is_content() {
        let slides = split("Slide one\n---\nstill one");
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_blank_line_split() {
        let slides = split("Slide one\n\n\n\nSlide two");
        assert_eq!(slides, vec!["Slide one", "Slide two"]);
    }

    #[test]
    fn test_two_blank_lines_do_not_split() {
        let slides = split("Slide one\n\n\nstill one");
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_heading_inference() {
        let slides = split("# First\n\nContent\n\n# Second\n\nMore content");
        assert_eq!(slides.len(), 2);
        assert!(slides[0].starts_with("# First"));
        assert!(slides[1].starts_with("# Second"));
    }

    #[test]
    fn test_h2_no_split() {
        let slides = split("# Title\n\n## Subtitle\n\nContent");
        assert_eq!(slides.len(), 1);
    }

    #[test]
    fn test_combined_separators() {
        // Overlapping separators make a single break
        let slides = split("Slide one\n\n\n\n---\n\n\n\nSlide two");
        assert_eq!(slides.len(), 2);
    }

    #[test]
    fn test_fence_protects_content() {
        let body = "# Work\n\n:::card Notes\n# not a slide\n\n---\n\n:::\n\nAfter";
        let slides = split(body);
        assert_eq!(slides.len(), 1, "got {slides:?}");
        assert!(slides[0].contains("# not a slide"));
    }

    #[test]
    fn test_separator_at_edges() {
        let slides = split("---\n\nOnly slide\n\n---");
        assert_eq!(slides, vec!["Only slide"]);
    }
}
