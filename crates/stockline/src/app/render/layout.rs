use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::KeymapConfig;
use crate::editor::{Command, EditSession};

use super::super::state::App;

/// Render the title bar with the tracked ticker count and version.
pub(super) fn render_title(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let version_label = format!("v{}", env!("CARGO_PKG_VERSION"));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(version_label.chars().count() as u16 + 1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " stockline ",
            Style::default().bg(Color::Magenta).fg(Color::Black),
        ),
        Span::raw(format!(" {} tracked", app.quotes.len())),
    ]));
    frame.render_widget(title, chunks[0]);

    let dim_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);
    let label = Paragraph::new(Line::from(Span::styled(version_label, dim_style)))
        .alignment(Alignment::Right);
    frame.render_widget(label, chunks[1]);
}

/// Render key hints, or the editor's bindings while a session is active.
pub(super) fn render_hints(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let text = match &app.editor {
        EditSession::Active(active) => match active.command() {
            Command::Add => {
                "enter add | esc cancel | ctrl+a/ctrl+e jump | ctrl+b/ctrl+f move".to_string()
            }
            Command::Remove => {
                "enter remove | esc cancel | ctrl+a/ctrl+e jump | ctrl+b/ctrl+f move".to_string()
            }
        },
        EditSession::Inactive => idle_hints(&app.keymap),
    };
    let hints = Paragraph::new(Line::raw(text)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}

/// Dashboard bindings, taken from the configured keymap.
fn idle_hints(keymap: &KeymapConfig) -> String {
    let mut parts = vec!["+ add".to_string(), "- remove".to_string()];
    if !keymap.refresh.trim().is_empty() {
        parts.push(format!("{} refresh", keymap.refresh.trim()));
    }
    if !keymap.quit.trim().is_empty() {
        parts.push(format!("{} quit", keymap.quit.trim()));
    }
    parts.join(" | ")
}

/// Render horizontal separator.
pub(super) fn render_separator(frame: &mut ratatui::Frame, area: Rect) {
    let separator = Paragraph::new(Line::raw(dashed_line(area.width as usize))).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(separator, area);
}

/// Dashed separator line.
fn dashed_line(width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let pattern = "- ";
    pattern.repeat(width / pattern.len() + 1)[..width].to_string()
}

#[cfg(test)]
mod tests {
    use super::{dashed_line, idle_hints};
    use crate::config::KeymapConfig;

    #[test]
    fn idle_hints_follow_configured_keymap() {
        let keymap = KeymapConfig {
            refresh: "f5".to_string(),
            quit: "ctrl+q".to_string(),
        };
        assert_eq!(idle_hints(&keymap), "+ add | - remove | f5 refresh | ctrl+q quit");

        let unbound = KeymapConfig {
            refresh: String::new(),
            quit: "q".to_string(),
        };
        assert_eq!(idle_hints(&unbound), "+ add | - remove | q quit");
    }

    #[test]
    fn dashed_line_fills_exact_width() {
        assert_eq!(dashed_line(0), "");
        assert_eq!(dashed_line(5), "- - -");
        assert_eq!(dashed_line(4), "- - ");
    }
}
