//! Application event types.
//!
//! The input thread forwards terminal events through an mpsc channel and
//! the main loop handles them one at a time.

use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Resize,
}
