//! Inline ticker editor.
//!
//! A session is activated by the dashboard when the user asks to add or
//! remove tickers. While active it receives every key event, edits its
//! line buffer, and on Enter parses the line and applies it to the
//! profile. Esc discards the line.
//!
//! Submodules:
//! - buffer: pure cursor/buffer transitions
//! - commit: tokenizing and applying a confirmed line
//! - view: painting the input row onto a `Surface`

mod buffer;
mod commit;
mod view;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::profile::TickerProfile;
use crate::quotes::QuoteSnapshot;

pub use buffer::LineBuffer;
pub use view::{draw_input_row, Surface, INPUT_ROW};

/// What a session will do with its line once confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
}

impl Command {
    /// Map a trigger character to a command. Unknown triggers yield `None`.
    pub fn from_trigger(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Remove),
            _ => None,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Add => "Add tickers: ",
            Self::Remove => "Remove tickers: ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    command: Command,
    prompt: &'static str,
    line: LineBuffer,
}

impl ActiveSession {
    fn new(command: Command) -> Self {
        Self {
            command,
            prompt: command.prompt(),
            line: LineBuffer::new(),
        }
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn line(&self) -> &LineBuffer {
        &self.line
    }
}

/// Editor state owned by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Inactive,
    Active(ActiveSession),
}

/// Result of feeding one key to an active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// Still editing; the host should redraw and keep forwarding keys.
    Editing,
    /// Esc: the line was discarded.
    Cancelled,
    /// Enter: the line was applied. `None` means it held no tickers.
    Committed(Option<QuoteSnapshot>),
}

impl Handled {
    pub fn ended(&self) -> bool {
        !matches!(self, Self::Editing)
    }
}

enum EditKey {
    Cancel,
    Confirm,
    DeleteBackward,
    MoveLeft,
    MoveRight,
    JumpToStart,
    JumpToEnd,
    Insert(char),
}

fn classify(key: KeyEvent) -> Option<EditKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Esc => Some(EditKey::Cancel),
        KeyCode::Enter => Some(EditKey::Confirm),
        KeyCode::Backspace => Some(EditKey::DeleteBackward),
        KeyCode::Char('h') if ctrl => Some(EditKey::DeleteBackward),
        KeyCode::Left => Some(EditKey::MoveLeft),
        KeyCode::Char('b') if ctrl => Some(EditKey::MoveLeft),
        KeyCode::Right => Some(EditKey::MoveRight),
        KeyCode::Char('f') if ctrl => Some(EditKey::MoveRight),
        KeyCode::Home => Some(EditKey::JumpToStart),
        KeyCode::Char('a') if ctrl => Some(EditKey::JumpToStart),
        KeyCode::End => Some(EditKey::JumpToEnd),
        KeyCode::Char('e') if ctrl => Some(EditKey::JumpToEnd),
        KeyCode::Char(' ') if !ctrl && !alt => Some(EditKey::Insert(' ')),
        KeyCode::Char(ch) if !ctrl && !alt && !ch.is_control() => Some(EditKey::Insert(ch)),
        _ => None,
    }
}

impl EditSession {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Start a fresh session for `command`, discarding any previous line.
    pub fn prompt(&mut self, command: Command) {
        tracing::debug!(?command, "line editor activated");
        *self = Self::Active(ActiveSession::new(command));
    }

    /// Start a session from a trigger character. Returns false, leaving the
    /// session untouched, when the trigger is not bound to a command.
    pub fn prompt_trigger(&mut self, trigger: char) -> bool {
        match Command::from_trigger(trigger) {
            Some(command) => {
                self.prompt(command);
                true
            }
            None => false,
        }
    }

    /// Feed one key event to the session.
    ///
    /// Keys reaching an inactive session are ignored and report
    /// `Handled::Editing` so the host keeps its own dispatch unchanged.
    pub fn handle<P: TickerProfile>(&mut self, key: KeyEvent, profile: &mut P) -> Handled {
        let Self::Active(active) = &mut *self else {
            return Handled::Editing;
        };
        let Some(action) = classify(key) else {
            return Handled::Editing;
        };

        let line = &mut active.line;
        match action {
            EditKey::Cancel => {
                tracing::debug!(command = ?active.command, "line editor cancelled");
                self.done();
                return Handled::Cancelled;
            }
            EditKey::Confirm => {
                let snapshot = commit::execute(active.command, &line.text(), profile);
                self.done();
                return Handled::Committed(snapshot);
            }
            EditKey::DeleteBackward => {
                line.delete_before_cursor();
            }
            EditKey::MoveLeft => line.move_left(),
            EditKey::MoveRight => line.move_right(),
            EditKey::JumpToStart => line.jump_to_start(),
            EditKey::JumpToEnd => line.jump_to_end(),
            EditKey::Insert(ch) => line.insert(ch),
        }
        Handled::Editing
    }

    /// End the session. Safe to call when already inactive.
    pub fn done(&mut self) {
        *self = Self::Inactive;
    }
}
