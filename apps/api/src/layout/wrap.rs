//! Text wrapping and free-text splitting.
//!
//! Greedy word wrap, measured with the same static metrics the PDF will be
//! set in. A word wider than the line is broken by character so that no line
//! ever exceeds its width.

use crate::layout::font_metrics::{get_metrics, Font, MM_PER_PT};

/// Glyph prefixed to description lines that carry no marker of their own.
pub const BULLET: char = '•';

/// One printed line of a bullet list.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    /// True for the second and later lines of a logical line; printed with a
    /// hanging indent.
    pub continuation: bool,
}

/// Wraps `text` to lines no wider than `max_width_mm`. Whitespace runs collapse
/// to single spaces; an empty or blank string yields no lines.
pub fn wrap_text(text: &str, font: Font, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    wrap_with_widths(text, font, size_pt, max_width_mm, max_width_mm)
}

/// Greedy wrap where the first line and the continuation lines have
/// different widths (hanging indents).
pub fn wrap_with_widths(
    text: &str,
    font: Font,
    size_pt: f32,
    first_width_mm: f32,
    rest_width_mm: f32,
) -> Vec<String> {
    let metrics = get_metrics(font);
    let scale = size_pt * MM_PER_PT;
    let space_w = metrics.space_width * scale;
    let limit = |line_index: usize| {
        if line_index == 0 {
            first_width_mm
        } else {
            rest_width_mm
        }
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.measure_str(word) * scale;

        if !current.is_empty() {
            if current_width + space_w + word_w <= limit(lines.len()) {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
                continue;
            }
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if word_w <= limit(lines.len()) {
            current.push_str(word);
            current_width = word_w;
            continue;
        }

        // Overlong word: break by character.
        for c in word.chars() {
            let c_w = metrics.measure_str(c.encode_utf8(&mut [0; 4])) * scale;
            if !current.is_empty() && current_width + c_w > limit(lines.len()) {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(c);
            current_width += c_w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a free-text blob on newlines, then wraps each logical line on its own.
/// Blank logical lines are dropped.
pub fn split_blob(text: &str, font: Font, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| wrap_text(line, font, size_pt, max_width_mm))
        .collect()
}

/// Splits a description into bulleted, wrapped lines.
///
/// Every logical line gets a bullet on its first printed line unless it already
/// starts with one (`•`, `- `, `* `). Continuation lines are wrapped to
/// `max_width_mm - hanging_mm` so they fit after the hanging indent.
pub fn bullet_lines(
    text: &str,
    font: Font,
    size_pt: f32,
    max_width_mm: f32,
    hanging_mm: f32,
) -> Vec<WrappedLine> {
    let mut out = Vec::new();
    for logical in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let item = if has_marker(logical) {
            logical.to_string()
        } else {
            format!("{BULLET} {logical}")
        };
        let wrapped = wrap_with_widths(
            &item,
            font,
            size_pt,
            max_width_mm,
            (max_width_mm - hanging_mm).max(1.0),
        );
        out.extend(
            wrapped
                .into_iter()
                .enumerate()
                .map(|(i, text)| WrappedLine {
                    text,
                    continuation: i > 0,
                }),
        );
    }
    out
}

fn has_marker(line: &str) -> bool {
    line.starts_with(BULLET) || line.starts_with("- ") || line.starts_with("* ")
}

/// Joins the non-blank parts with `separator`, so the separator never sits
/// next to an empty field or at either end.
pub fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::text_width_mm;

    const LONG: &str = "Architected a distributed caching layer using consistent hashing, \
                        reducing p99 latency by 40% under peak load across five services";

    #[test]
    fn test_wrap_empty_returns_no_lines() {
        assert!(wrap_text("", Font::HELVETICA, 9.0, 100.0).is_empty());
        assert!(wrap_text("   \t ", Font::HELVETICA, 9.0, 100.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_text("Did   X", Font::HELVETICA, 9.0, 100.0);
        assert_eq!(lines, vec!["Did X"]);
    }

    #[test]
    fn test_wrapped_lines_fit_width() {
        let width = 60.0;
        let lines = wrap_text(LONG, Font::HELVETICA, 10.0, width);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                text_width_mm(line, Font::HELVETICA, 10.0) <= width + 1e-3,
                "line too wide: {line}"
            );
        }
        assert_eq!(lines.join(" "), LONG.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_depends_on_font_size() {
        let small = wrap_text(LONG, Font::HELVETICA, 8.0, 80.0);
        let large = wrap_text(LONG, Font::HELVETICA, 14.0, 80.0);
        assert!(large.len() > small.len());
    }

    #[test]
    fn test_overlong_word_is_broken() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, Font::HELVETICA, 10.0, 30.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width_mm(line, Font::HELVETICA, 10.0) <= 30.0 + 1e-3);
        }
    }

    #[test]
    fn test_split_blob_splits_on_newlines_first() {
        let lines = split_blob("Rust\n\nGo\n  SQL  ", Font::HELVETICA, 9.0, 170.0);
        assert_eq!(lines, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_bullet_lines_keep_existing_markers() {
        let lines = bullet_lines("• Did X\n• Did Y", Font::HELVETICA, 9.0, 165.0, 3.0);
        assert_eq!(
            lines,
            vec![
                WrappedLine { text: "• Did X".to_string(), continuation: false },
                WrappedLine { text: "• Did Y".to_string(), continuation: false },
            ]
        );
    }

    #[test]
    fn test_bullet_lines_prefix_unmarked_lines() {
        let lines = bullet_lines("Did X\n- Did Y\n\n", Font::HELVETICA, 9.0, 165.0, 3.0);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["• Did X", "- Did Y"]);
    }

    #[test]
    fn test_bullet_lines_continuations_are_flagged() {
        let lines = bullet_lines(LONG, Font::HELVETICA, 9.0, 50.0, 3.0);
        assert!(lines.len() > 1);
        assert!(!lines[0].continuation);
        assert!(lines[0].text.starts_with('•'));
        assert!(lines[1..].iter().all(|l| l.continuation));
        for line in &lines[1..] {
            assert!(text_width_mm(&line.text, Font::HELVETICA, 9.0) <= 47.0 + 1e-3);
        }
    }

    #[test]
    fn test_join_present_skips_blank_parts() {
        assert_eq!(join_present(&["555-1234", "", "jane@x.com", "  "], " | "), "555-1234 | jane@x.com");
        assert_eq!(join_present(&["", ""], " | "), "");
        assert_eq!(join_present(&["only"], " • "), "only");
    }
}
