//! Line classification for the lightweight markup used by the manuscript
//! text sources.
//!
//! Classification is purely syntactic: a line's style is derived from its
//! leading characters alone, and the same line always classifies the same
//! way. Nothing is persisted; the composer classifies each line transiently
//! while rendering.

/// The style class of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `# ` prefix; the carried text has the marker and its space stripped
    Heading1(&'a str),
    /// `## ` prefix
    Heading2(&'a str),
    /// `### ` prefix
    Heading3(&'a str),
    /// A blank line, or a literal `---` token. Both produce only a vertical
    /// gap, never visible output.
    Break,
    /// Anything else, carried through unchanged
    Body(&'a str),
}

/// Classify one line of source text.
pub fn classify(line: &str) -> LineClass<'_> {
    if let Some(text) = line.strip_prefix("# ") {
        return LineClass::Heading1(text);
    }
    if let Some(text) = line.strip_prefix("## ") {
        return LineClass::Heading2(text);
    }
    if let Some(text) = line.strip_prefix("### ") {
        return LineClass::Heading3(text);
    }
    match line.trim() {
        "" | "---" => LineClass::Break,
        _ => LineClass::Body(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_markers_are_stripped() {
        assert_eq!(classify("# Title"), LineClass::Heading1("Title"));
        assert_eq!(classify("## Sub"), LineClass::Heading2("Sub"));
        assert_eq!(classify("### Sub2"), LineClass::Heading3("Sub2"));
    }

    #[test]
    fn blank_and_rule_lines_are_breaks() {
        assert_eq!(classify(""), LineClass::Break);
        assert_eq!(classify("   "), LineClass::Break);
        assert_eq!(classify("---"), LineClass::Break);
        assert_eq!(classify("  ---  "), LineClass::Break);
    }

    #[test]
    fn everything_else_is_body() {
        assert_eq!(classify("plain text"), LineClass::Body("plain text"));
        // a marker without its trailing space is not a heading
        assert_eq!(classify("#hash"), LineClass::Body("#hash"));
        assert_eq!(classify("#### four"), LineClass::Body("#### four"));
        // a rule embedded in text is not a break
        assert_eq!(classify("a --- b"), LineClass::Body("a --- b"));
    }

    #[test]
    fn classification_is_stable() {
        let line = "## Wiederholung";
        assert_eq!(classify(line), classify(line));
    }
}
