//! Input event handling.
//!
//! Keys go to the line editor while a session is active. Otherwise the
//! dashboard handles them: trigger characters open the editor, and the
//! configured chords quit or refresh.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::editor::Handled;
use crate::events::AppEvent;
use crate::keymap::matches_chord;
use crate::profile::TickerProfile;

use super::state::App;

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Resize => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if app.editor.is_active() {
            tracing::debug!("line editor abandoned on quit");
            app.editor.done();
        }
        app.should_quit = true;
        return;
    }

    if app.editor.is_active() {
        let handled = app.editor.handle(key, &mut app.profile);
        if handled.ended() {
            tracing::debug!(?handled, "line editor closed");
        }
        finish_edit(app, handled);
        return;
    }

    if let KeyCode::Char(ch) = key.code {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        if plain && app.editor.prompt_trigger(ch) {
            app.output = None;
            return;
        }
    }
    if app
        .quit_chord
        .as_ref()
        .is_some_and(|chord| matches_chord(key, chord))
    {
        app.should_quit = true;
        return;
    }
    if app
        .refresh_chord
        .as_ref()
        .is_some_and(|chord| matches_chord(key, chord))
    {
        app.quotes = app.profile.quotes();
        app.refresh_requested = true;
    }
}

fn finish_edit(app: &mut App, handled: Handled) {
    match handled {
        Handled::Editing | Handled::Cancelled | Handled::Committed(None) => {}
        Handled::Committed(Some(snapshot)) => {
            let count = snapshot.len();
            app.quotes = snapshot;
            let noun = if count == 1 { "ticker" } else { "tickers" };
            app.set_output(format!("Tracking {count} {noun}."));
        }
    }
}
