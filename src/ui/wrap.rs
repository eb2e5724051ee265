use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Soft-wrap a run of styled spans to `width` display columns.
///
/// Breaks at the last space on the line when one exists, otherwise mid-word.
/// Span styles survive wrapping, including across line breaks, so highlight
/// runs that straddle a break stay highlighted. Leading spaces on
/// continuation lines are dropped.
pub(crate) fn wrap_styled(spans: &[Span<'static>], width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }

    let mut cells: Vec<(char, Style)> = Vec::new();
    for span in spans {
        for ch in span.content.chars() {
            cells.push((ch, span.style));
        }
    }
    if cells.is_empty() {
        return vec![Line::default()];
    }

    let mut lines = Vec::new();
    let mut start = 0;
    while start < cells.len() {
        // Skip the separator space that caused the previous break.
        if !lines.is_empty() && cells[start].0 == ' ' {
            start += 1;
            if start >= cells.len() {
                break;
            }
        }

        let mut used = 0;
        let mut end = start;
        let mut last_space = None;
        while end < cells.len() {
            let cell_width = cells[end].0.width().unwrap_or(0);
            if used + cell_width > width {
                break;
            }
            if cells[end].0 == ' ' {
                last_space = Some(end);
            }
            used += cell_width;
            end += 1;
        }

        if end < cells.len()
            && let Some(space) = last_space
            && space > start
        {
            end = space;
        }
        if end == start {
            end = start + 1;
        }

        lines.push(spans_from_cells(&cells[start..end]));
        start = end;
    }

    lines
}

fn spans_from_cells(cells: &[(char, Style)]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut buffer = String::new();
    let mut style = None;
    for (ch, cell_style) in cells {
        if style != Some(*cell_style) {
            if let Some(previous) = style.take()
                && !buffer.is_empty()
            {
                spans.push(Span::styled(std::mem::take(&mut buffer), previous));
            }
            style = Some(*cell_style);
        }
        buffer.push(*ch);
    }
    if let Some(style) = style
        && !buffer.is_empty()
    {
        spans.push(Span::styled(buffer, style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::style::{Color, Style};
    use unicode_width::UnicodeWidthStr;

    use super::*;

    fn plain(text: &str) -> Span<'static> {
        Span::raw(text.to_string())
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn lines_never_exceed_the_width() {
        let spans = [plain("React is a JavaScript library for building user interfaces.")];
        for width in [10, 17, 24, 80] {
            for line in wrap_styled(&spans, width) {
                assert!(line_text(&line).width() <= width, "width {width}");
            }
        }
    }

    #[test]
    fn wrapping_preserves_all_words() {
        let text = "Components are the building blocks of React applications.";
        let joined = wrap_styled(&[plain(text)], 16)
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(joined, text);
    }

    #[test]
    fn breaks_fall_on_spaces_when_possible() {
        let lines = wrap_styled(&[plain("alpha beta gamma")], 11);
        assert_eq!(line_text(&lines[0]), "alpha beta");
        assert_eq!(line_text(&lines[1]), "gamma");
    }

    #[test]
    fn long_words_break_mid_word() {
        let lines = wrap_styled(&[plain("abcdefghij")], 4);
        assert_eq!(
            lines.iter().map(line_text).collect::<Vec<_>>(),
            vec!["abcd", "efgh", "ij"]
        );
    }

    #[test]
    fn styles_survive_a_line_break() {
        let highlighted = Style::new().bg(Color::Yellow);
        let spans = [
            plain("plain "),
            Span::styled("highlighted".to_string(), highlighted),
        ];
        let lines = wrap_styled(&spans, 10);
        assert_eq!(
            lines.iter().map(line_text).collect::<Vec<_>>(),
            vec!["plain", "highlighte", "d"]
        );
        for continuation in &lines[1..] {
            assert!(
                continuation
                    .spans
                    .iter()
                    .all(|span| span.style == highlighted)
            );
        }
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        let lines = wrap_styled(&[], 20);
        assert_eq!(lines.len(), 1);
        assert!(line_text(&lines[0]).is_empty());
    }
}
