use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::Frame;

use crate::editor::Surface;

/// `Surface` over a ratatui frame, relative to `area`.
///
/// The cursor position is applied when the surface is dropped, so the
/// last `set_cursor`/`hide_cursor` call of a frame wins.
pub(super) struct FrameSurface<'a, 'f> {
    frame: &'a mut Frame<'f>,
    area: Rect,
    cursor: Option<Position>,
}

impl<'a, 'f> FrameSurface<'a, 'f> {
    pub(super) fn new(frame: &'a mut Frame<'f>, area: Rect) -> Self {
        Self {
            frame,
            area,
            cursor: None,
        }
    }

    fn contains(&self, col: u16, row: u16) -> bool {
        col < self.area.width && row < self.area.height
    }
}

impl Surface for FrameSurface<'_, '_> {
    fn draw_text(&mut self, col: u16, row: u16, text: &str, style: Style) {
        if !self.contains(col, row) {
            return;
        }
        let width = (self.area.width - col) as usize;
        self.frame.buffer_mut().set_stringn(
            self.area.x + col,
            self.area.y + row,
            text,
            width,
            style,
        );
    }

    fn clear_row(&mut self, row: u16) {
        if !self.contains(0, row) {
            return;
        }
        let blank = " ".repeat(self.area.width as usize);
        self.frame
            .buffer_mut()
            .set_string(self.area.x, self.area.y + row, blank, Style::reset());
    }

    fn set_cursor(&mut self, col: u16, row: u16) {
        if self.contains(col, row) {
            self.cursor = Some(Position::new(self.area.x + col, self.area.y + row));
        }
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }
}

impl Drop for FrameSurface<'_, '_> {
    fn drop(&mut self) {
        // Frames hide the cursor unless a position is set.
        if let Some(position) = self.cursor {
            self.frame.set_cursor_position(position);
        }
    }
}
