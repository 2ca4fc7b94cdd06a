//! Application state container.

use crate::config::{Config, KeymapConfig};
use crate::editor::EditSession;
use crate::keymap::{parse_key_chord, KeyChord};
use crate::profile::{Profile, TickerProfile};
use crate::quotes::QuoteSnapshot;

/// Main application state.
///
/// Holds all mutable state for the dashboard. Methods are split across
/// input.rs (event handling) and render (UI drawing).
pub struct App {
    pub editor: EditSession,
    pub profile: Profile,
    pub quotes: QuoteSnapshot,
    pub keymap: KeymapConfig,
    pub output: Option<String>,
    pub quit_chord: Option<KeyChord>,
    pub refresh_chord: Option<KeyChord>,
    pub should_quit: bool,
    pub refresh_requested: bool,
}

impl App {
    pub fn new(config: &Config, profile: Profile) -> Self {
        let quit_chord = parse_key_chord(&config.keymap.quit);
        let refresh_chord = parse_key_chord(&config.keymap.refresh);
        if quit_chord.is_none() {
            tracing::warn!(chord = %config.keymap.quit, "unparseable quit binding");
        }
        if refresh_chord.is_none() {
            tracing::warn!(chord = %config.keymap.refresh, "unparseable refresh binding");
        }
        let quotes = profile.quotes();
        Self {
            editor: EditSession::default(),
            profile,
            quotes,
            keymap: config.keymap.clone(),
            output: None,
            quit_chord,
            refresh_chord,
            should_quit: false,
            refresh_requested: false,
        }
    }

    /// Set the message shown on the bottom row.
    pub fn set_output(&mut self, message: String) {
        let trimmed = message.trim().to_string();
        if trimmed.is_empty() {
            self.output = None;
        } else {
            self.output = Some(trimmed);
        }
    }
}

pub const OUTPUT_MAX_LINES: usize = 2;
