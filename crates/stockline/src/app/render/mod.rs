//! UI rendering methods.
//!
//! Handles all drawing for the dashboard:
//! - Title bar and key hints
//! - Separator
//! - The line editor's input row
//! - Quote table and output message

mod layout;
mod output;
mod quotes;
mod surface;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::editor::{draw_input_row, INPUT_ROW};

use super::state::App;
use surface::FrameSurface;

/// Main render entry point. Called once per handled event.
pub fn render(app: &App, frame: &mut ratatui::Frame) {
    let area = frame.area();
    let output_lines = output::output_lines(app, area.width as usize);
    let output_height = output_lines.len() as u16;

    // Vertical layout: header | input | quotes | output.
    // The input row is painted by the editor through `FrameSurface`.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_ROW),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(output_height),
        ])
        .split(area);

    // Header: title | hints | separator
    let header = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(chunks[0]);

    layout::render_title(app, frame, header[0]);
    layout::render_hints(app, frame, header[1]);
    layout::render_separator(frame, header[2]);
    quotes::render_quotes(app, frame, chunks[2]);

    if output_height > 0 {
        let output = Paragraph::new(output_lines).style(Style::default().fg(Color::Gray));
        frame.render_widget(output, chunks[3]);
    }

    let mut surface = FrameSurface::new(frame, area);
    draw_input_row(&app.editor, &mut surface);
}
