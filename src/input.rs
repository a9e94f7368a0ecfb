//! Keyboard listener for live mode.
//!
//! Runs on its own thread, polls crossterm for key events and triggers the
//! shared [`CancelSignal`] when a cancellation key is seen. It never touches
//! the render path's state.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::signal::CancelSignal;

/// How long a single poll waits before re-checking the cancel flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Whether a key event should end the session.
///
/// Cancellation keys: Escape, `q`, and Ctrl+C (raw mode delivers Ctrl+C as
/// a key instead of SIGINT).
pub fn is_cancel_key(event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }

    match event.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') | KeyCode::Char('Q') => !event.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('c') | KeyCode::Char('C') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Spawn the listener thread.
///
/// The thread exits once `cancel` is triggered, whoever triggered it. A poll
/// or read failure is treated as a request to stop.
pub fn spawn_listener(cancel: CancelSignal) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("asciicam-input".to_string())
        .spawn(move || listen(&cancel))
}

fn listen(cancel: &CancelSignal) {
    while !cancel.is_cancelled() {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if is_cancel_key(&key) => {
                    log::debug!("cancel key pressed: {:?}", key.code);
                    cancel.trigger();
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("failed to read terminal event: {}", e);
                    cancel.trigger();
                }
            },
            Ok(false) => {}
            Err(e) => {
                log::warn!("failed to poll terminal events: {}", e);
                cancel.trigger();
            }
        }
    }
}
