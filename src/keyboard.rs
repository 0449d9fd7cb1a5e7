/// Keyboard → handheld buttons.
///
/// Input model: instead of acting on each key event individually, we keep a
/// map from each key to the time (ms) its last press/repeat event arrived.
/// Each frame a button counts as held if any of its keys is still "fresh".
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW_MS` of silence.

use std::collections::HashMap;
use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use witch_shooter::platform::{Button, ButtonTracker, Buttons, InputFrame};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many ms. The OS key-repeat rate is ≥ 15 Hz, so a held key refreshes
/// well before expiry.
pub const HOLD_WINDOW_MS: u64 = 133;

/// Which handheld button a key stands for, if any.
pub fn button_for(code: &KeyCode) -> Option<Button> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(Button::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(Button::Down)
        }
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(Button::Fire)
        }
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('c') | KeyCode::Char('C') => {
            Some(Button::Guard)
        }
        _ => None,
    }
}

fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub struct Keyboard {
    rx: mpsc::Receiver<Event>,
    /// Maps each held button → the time it was last seen (press or repeat).
    last_seen: HashMap<Button, u64>,
    tracker: ButtonTracker,
    quit: bool,
}

impl Keyboard {
    pub fn new(rx: mpsc::Receiver<Event>) -> Self {
        Self {
            rx,
            last_seen: HashMap::new(),
            tracker: ButtonTracker::new(),
            quit: false,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Drain all pending events (non-blocking) and sample the buttons at `now`.
    pub fn poll(&mut self, now: u64) -> InputFrame {
        while let Ok(event) = self.rx.try_recv() {
            if let Event::Key(key) = event {
                self.handle_key(key, now);
            }
        }

        let held: Buttons = Button::ALL
            .into_iter()
            .filter(|button| {
                self.last_seen
                    .get(button)
                    .map(|&last| now.saturating_sub(last) <= HOLD_WINDOW_MS)
                    .unwrap_or(false)
            })
            .collect();
        self.tracker.update(held)
    }

    fn handle_key(&mut self, key: KeyEvent, now: u64) {
        let KeyEvent {
            code,
            kind,
            modifiers,
            ..
        } = key;
        match kind {
            KeyEventKind::Press => {
                if is_quit(&code, modifiers) {
                    self.quit = true;
                    return;
                }
                if let Some(button) = button_for(&code) {
                    self.last_seen.insert(button, now);
                }
            }
            // Repeat: refresh timestamp so the button stays "held"
            KeyEventKind::Repeat => {
                if let Some(button) = button_for(&code) {
                    self.last_seen.insert(button, now);
                }
            }
            // Release: drop immediately (keyboard-enhancement path)
            KeyEventKind::Release => {
                if let Some(button) = button_for(&code) {
                    self.last_seen.remove(&button);
                }
            }
        }
    }
}
