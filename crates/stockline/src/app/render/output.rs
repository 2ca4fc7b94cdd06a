use ratatui::text::Line;

use super::super::state::{App, OUTPUT_MAX_LINES};

/// Output area lines, hidden while the editor owns the keyboard.
pub(super) fn output_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    if app.editor.is_active() {
        return Vec::new();
    }
    let Some(message) = app.output.as_ref() else {
        return Vec::new();
    };
    if message.trim().is_empty() {
        return Vec::new();
    }

    wrap_text_lines(message, width, OUTPUT_MAX_LINES)
}

fn wrap_text_lines(message: &str, width: usize, max_lines: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw_line in message.lines() {
        for item in wrap_preserve(raw_line, width) {
            lines.push(Line::raw(item));
            if lines.len() >= max_lines {
                return lines;
            }
        }
    }
    lines
}

fn wrap_preserve(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }
    let mut output = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    for ch in line.chars() {
        if count >= width {
            output.push(current);
            current = String::new();
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    output.push(current);
    output
}

#[cfg(test)]
mod tests {
    use super::{wrap_preserve, wrap_text_lines};

    #[test]
    fn wrap_preserve_splits_on_width() {
        assert_eq!(wrap_preserve("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_preserve("", 4), vec![String::new()]);
    }

    #[test]
    fn wrap_text_lines_caps_line_count() {
        assert_eq!(wrap_text_lines("abcdefghij", 3, 2).len(), 2);
        assert_eq!(wrap_text_lines("one\ntwo", 10, 5).len(), 2);
    }
}
