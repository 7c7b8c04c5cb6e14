use crate::font::Font;
use crate::units::Pt;

/// Calculates the vertical offset from a top-of-line reference point down to
/// the font's baseline.
///
/// In PDF, text coordinates specify the baseline position. The returned
/// value is the negated ascent, so it can be added to a top-edge y
/// coordinate to find where the baseline belongs.
pub fn baseline_offset(font: &Font, size: Pt) -> Pt {
    Pt(0.0) - font.ascent(size)
}

/// Calculate the width of a string of text for the given font and size.
/// Characters the font has no glyph for contribute nothing.
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    text.chars()
        .filter_map(|ch| font.advance(ch, size))
        .sum()
}

/// Greedily wraps one run of text into lines no wider than `max_width`,
/// keeping words intact. A single word wider than `max_width` still gets its
/// own line rather than being dropped. The measure function maps a candidate
/// line to its rendered width.
pub fn wrap_lines<F>(text: &str, max_width: Pt, measure: F) -> Vec<String>
where
    F: Fn(&str) -> Pt,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure(&candidate) > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // a measure where every character is one point wide
    fn one_pt_per_char(text: &str) -> Pt {
        Pt(text.chars().count() as f32)
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_lines("hallo welt", Pt(20.0), one_pt_per_char);
        assert_eq!(lines, vec!["hallo welt".to_string()]);
    }

    #[test]
    fn words_are_kept_intact_across_breaks() {
        let lines = wrap_lines("aaa bb c", Pt(4.0), one_pt_per_char);
        assert_eq!(lines, vec!["aaa".to_string(), "bb c".to_string()]);
    }

    #[test]
    fn an_overlong_word_still_emits() {
        let lines = wrap_lines("unaussprechlich ja", Pt(5.0), one_pt_per_char);
        assert_eq!(lines, vec!["unaussprechlich".to_string(), "ja".to_string()]);
    }

    #[test]
    fn whitespace_only_text_produces_no_lines() {
        assert!(wrap_lines("   ", Pt(10.0), one_pt_per_char).is_empty());
        assert!(wrap_lines("", Pt(10.0), one_pt_per_char).is_empty());
    }

    #[test]
    fn no_line_exceeds_the_bound_when_words_fit() {
        let text = "eins zwei drei vier fuenf sechs sieben";
        let max = Pt(12.0);
        for line in wrap_lines(text, max, one_pt_per_char) {
            assert!(one_pt_per_char(&line) <= max, "line too wide: {line:?}");
        }
    }
}
