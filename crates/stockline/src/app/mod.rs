//! Application orchestration and main event loop.
//!
//! This module owns the dashboard lifecycle:
//! - Initialization (terminal setup, config, logging, profile loading)
//! - Event loop (one key event handled, then one frame drawn)
//! - Routing keys to the line editor while a session is active
//! - UI rendering delegation
//!
//! Submodules:
//! - state: App struct
//! - runner: main loop and terminal setup
//! - input: keyboard event handling
//! - render: UI rendering methods

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
