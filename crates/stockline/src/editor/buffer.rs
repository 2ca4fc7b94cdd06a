//! Single-line edit buffer with a cursor.
//!
//! All transitions are pure: they mutate the buffer in place and never
//! touch the terminal. Every move clamps at the buffer edges.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor index, `0..=len()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Splice `ch` in at the cursor and step past it.
    pub fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.move_right();
    }

    /// Remove the character before the cursor. Returns false at column 0.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.chars.remove(self.cursor - 1);
        self.move_left();
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.len();
    }
}

#[cfg(test)]
mod tests {
    use super::LineBuffer;

    fn buffer_from(text: &str) -> LineBuffer {
        let mut line = LineBuffer::new();
        for ch in text.chars() {
            line.insert(ch);
        }
        line
    }

    #[test]
    fn insert_appends_at_end() {
        let line = buffer_from("ibm");
        assert_eq!(line.text(), "ibm");
        assert_eq!(line.cursor(), 3);
    }

    #[test]
    fn insert_splices_mid_buffer() {
        let mut line = buffer_from("ac");
        line.move_left();
        line.insert('b');
        assert_eq!(line.text(), "abc");
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn delete_mid_buffer_keeps_tail() {
        let mut line = buffer_from("abcd");
        line.move_left();
        line.move_left();
        assert!(line.delete_before_cursor());
        assert_eq!(line.text(), "acd");
        assert_eq!(line.cursor(), 1);
    }

    #[test]
    fn delete_at_start_is_noop() {
        let mut line = buffer_from("ko");
        line.jump_to_start();
        assert!(!line.delete_before_cursor());
        assert_eq!(line.text(), "ko");
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn insert_then_delete_restores_content_and_cursor() {
        let mut line = buffer_from("goog");
        line.move_left();
        line.move_left();
        let before = line.clone();
        line.insert('x');
        line.delete_before_cursor();
        assert_eq!(line, before);
    }

    #[test]
    fn moves_clamp_at_edges() {
        let mut line = buffer_from("v");
        for _ in 0..5 {
            line.move_right();
        }
        assert_eq!(line.cursor(), 1);
        for _ in 0..5 {
            line.move_left();
        }
        assert_eq!(line.cursor(), 0);

        let mut empty = LineBuffer::new();
        empty.move_left();
        empty.move_right();
        assert_eq!(empty.cursor(), 0);
    }

    #[test]
    fn jumps_reach_both_ends() {
        let mut line = buffer_from("orcl");
        line.jump_to_start();
        assert_eq!(line.cursor(), 0);
        line.jump_to_end();
        assert_eq!(line.cursor(), 4);
    }

    #[test]
    fn cursor_stays_in_bounds_over_mixed_sequence() {
        let mut line = LineBuffer::new();
        let script = "a<<b>>>c<d^e$<<<<f";
        for step in script.chars() {
            match step {
                '<' => line.move_left(),
                '>' => line.move_right(),
                '^' => line.jump_to_start(),
                '$' => line.jump_to_end(),
                'd' => {
                    line.delete_before_cursor();
                }
                ch => line.insert(ch),
            }
            assert!(line.cursor() <= line.len());
        }
    }
}
