/// A run of text, flagged when it matches the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Split `text` around case-insensitive occurrences of `term`.
pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    if term.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        if let Some(len) = match_len(&text[cursor..], term) {
            if plain_start < cursor {
                segments.push(Segment::plain(&text[plain_start..cursor]));
            }
            segments.push(Segment::marked(&text[cursor..cursor + len]));
            cursor += len;
            plain_start = cursor;
        } else {
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[plain_start..]));
    }
    segments
}

/// Byte length of the prefix of `haystack` that equals `term` ignoring case.
fn match_len(haystack: &str, term: &str) -> Option<usize> {
    let mut consumed = 0;
    let mut chars = haystack.chars();
    for wanted in term.chars() {
        let found = chars.next()?;
        if !found.to_lowercase().eq(wanted.to_lowercase()) {
            return None;
        }
        consumed += found.len_utf8();
    }
    Some(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|segment| {
                if segment.highlighted {
                    format!("[{}]", segment.text)
                } else {
                    segment.text.clone()
                }
            })
            .collect()
    }

    #[test]
    fn marks_every_occurrence_preserving_case() {
        let segments = highlight("GxP rules and gxp audits", "gxp");
        assert_eq!(render(&segments), "[GxP] rules and [gxp] audits");
    }

    #[test]
    fn empty_term_returns_text() {
        assert_eq!(highlight("Ports", ""), vec![Segment::plain("Ports")]);
    }

    #[test]
    fn no_match_returns_single_plain_segment() {
        assert_eq!(highlight("Ports", "air"), vec![Segment::plain("Ports")]);
    }

    #[test]
    fn handles_multibyte_text() {
        let segments = highlight("Zoll über Häfen", "HÄFEN");
        assert_eq!(render(&segments), "Zoll über [Häfen]");
    }
}
