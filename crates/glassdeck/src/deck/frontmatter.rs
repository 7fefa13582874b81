use tracing::warn;

use super::DeckMeta;

/// Split an optional YAML frontmatter block off the top of a deck.
///
/// Frontmatter must open on the very first line with `---` and close with a
/// later `---` line. Malformed YAML is logged and treated as absent metadata;
/// the body after it is still returned.
pub fn extract(content: &str) -> (DeckMeta, String) {
    let content = content.replace("\r\n", "\n");
    let Some(rest) = content.strip_prefix("---\n") else {
        return (DeckMeta::default(), content);
    };

    let mut yaml_len = None;
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            yaml_len = Some(offset);
            offset += line.len();
            break;
        }
        offset += line.len();
    }

    let Some(yaml_len) = yaml_len else {
        return (DeckMeta::default(), content);
    };

    let yaml = &rest[..yaml_len];
    let body = rest[offset..].to_string();

    if yaml.trim().is_empty() {
        return (DeckMeta::default(), body);
    }

    match serde_yaml::from_str::<DeckMeta>(yaml) {
        Ok(meta) => (meta, body),
        Err(e) => {
            warn!("ignoring malformed frontmatter: {e}");
            (DeckMeta::default(), body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_frontmatter() {
        let (meta, body) = extract("# Slide\n\nText");
        assert!(meta.title.is_none());
        assert_eq!(body, "# Slide\n\nText");
    }

    #[test]
    fn test_reads_fields() {
        let (meta, body) =
            extract("---\ntitle: Demo\nauthor: Sam\ntheme: light\n---\n# First\n");
        assert_eq!(meta.title.as_deref(), Some("Demo"));
        assert_eq!(meta.author.as_deref(), Some("Sam"));
        assert_eq!(meta.theme.as_deref(), Some("light"));
        assert_eq!(body, "# First\n");
    }

    #[test]
    fn test_unterminated_is_body() {
        let (meta, body) = extract("---\ntitle: Demo\n# First");
        assert!(meta.title.is_none());
        assert!(body.starts_with("---"));
    }

    #[test]
    fn test_malformed_yaml_keeps_body() {
        let (meta, body) = extract("---\ntitle: [unclosed\n---\n# First");
        assert!(meta.title.is_none());
        assert_eq!(body, "# First");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (meta, _) = extract("---\ntitle: Demo\ntransition: fade\n---\n");
        assert_eq!(meta.title.as_deref(), Some("Demo"));
    }

    #[test]
    fn test_windows_line_endings() {
        let (meta, body) = extract("---\r\ntitle: Demo\r\n---\r\n# First\r\n");
        assert_eq!(meta.title.as_deref(), Some("Demo"));
        assert_eq!(body, "# First\n");
    }
}
