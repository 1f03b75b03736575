//! Line-oriented scanning over loosely structured markdown.

/// Trimmed lines of `text`, blank lines dropped
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Where the scanner currently is relative to the named sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState<S> {
    /// Before the first marker, or after a marker that was ignored
    Seeking,
    /// Collecting body lines for a section
    InSection(S),
}

/// A section found by [`SectionScanner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a, K> {
    pub kind: K,
    /// Text following the marker on the marker line itself
    pub inline: &'a str,
    /// Lines after the marker line, up to the next marker
    pub body: Vec<&'a str>,
}

/// Splits lines into sections at fixed marker substrings.
///
/// Only the first occurrence of each marker opens a section; a repeated
/// marker closes the current section and its lines are skipped until the
/// next new marker.
pub struct SectionScanner<'m, K> {
    markers: &'m [(K, &'static str)],
}

impl<'m, K: Copy + PartialEq> SectionScanner<'m, K> {
    pub fn new(markers: &'m [(K, &'static str)]) -> Self {
        Self { markers }
    }

    fn detect<'a>(&self, line: &'a str) -> Option<(K, &'a str)> {
        self.markers.iter().find_map(|(kind, marker)| {
            line.find(marker)
                .map(|at| (*kind, line[at + marker.len()..].trim()))
        })
    }

    pub fn scan<'a>(&self, lines: &[&'a str]) -> Vec<Section<'a, K>> {
        let mut sections: Vec<Section<'a, K>> = Vec::new();
        let mut state = ScanState::Seeking;

        for &line in lines {
            if let Some((kind, inline)) = self.detect(line) {
                if sections.iter().any(|s| s.kind == kind) {
                    state = ScanState::Seeking;
                } else {
                    sections.push(Section {
                        kind,
                        inline,
                        body: Vec::new(),
                    });
                    state = ScanState::InSection(sections.len() - 1);
                }
                continue;
            }

            if let ScanState::InSection(index) = state {
                sections[index].body.push(line);
            }
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        A,
        B,
    }

    const MARKERS: [(Kind, &str); 2] = [(Kind::A, "**A**:"), (Kind::B, "**B**:")];

    #[test]
    fn test_content_lines_drops_blank_and_trims() {
        let lines = content_lines("  one  \r\n\n   \n\ttwo\n");
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_sections_split_at_markers() {
        let lines = content_lines("preamble\n**A**: inline a\nbody 1\nbody 2\n**B**:\nbody 3");
        let sections = SectionScanner::new(&MARKERS).scan(&lines);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, Kind::A);
        assert_eq!(sections[0].inline, "inline a");
        assert_eq!(sections[0].body, vec!["body 1", "body 2"]);
        assert_eq!(sections[1].kind, Kind::B);
        assert_eq!(sections[1].inline, "");
        assert_eq!(sections[1].body, vec!["body 3"]);
    }

    #[test]
    fn test_repeated_marker_is_ignored() {
        let lines = content_lines("**A**: first\nkept\n**A**: second\ndropped\n**B**: b");
        let sections = SectionScanner::new(&MARKERS).scan(&lines);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].inline, "first");
        assert_eq!(sections[0].body, vec!["kept"]);
    }
}
