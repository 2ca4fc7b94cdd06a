//! Drawing the input row.
//!
//! The editor never talks to the terminal directly. The host hands it a
//! `Surface` once per frame and the session paints itself onto it.

use ratatui::style::{Color, Style};

use super::EditSession;

/// Row the editor owns, counted from the top of the dashboard.
pub const INPUT_ROW: u16 = 3;

/// Minimal drawing primitives the editor relies on.
pub trait Surface {
    fn draw_text(&mut self, col: u16, row: u16, text: &str, style: Style);
    fn clear_row(&mut self, row: u16);
    fn set_cursor(&mut self, col: u16, row: u16);
    fn hide_cursor(&mut self);
}

/// Paint the session onto `surface`.
///
/// An inactive session clears the row and hides the cursor. An active one
/// draws the prompt followed by the buffer, padded with one blank so a
/// glyph left behind by a deletion is erased.
pub fn draw_input_row<S: Surface>(session: &EditSession, surface: &mut S) {
    surface.clear_row(INPUT_ROW);
    let EditSession::Active(active) = session else {
        surface.hide_cursor();
        return;
    };

    let prompt = active.prompt();
    let prompt_width = u16::try_from(prompt.chars().count()).unwrap_or(u16::MAX);
    surface.draw_text(0, INPUT_ROW, prompt, Style::default().fg(Color::White));

    let mut text = active.line().text();
    text.push(' ');
    surface.draw_text(prompt_width, INPUT_ROW, &text, Style::default());
    let cursor = u16::try_from(active.line().cursor()).unwrap_or(u16::MAX);
    surface.set_cursor(prompt_width.saturating_add(cursor), INPUT_ROW);
}
