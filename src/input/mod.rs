//! Key-state tracking and per-tick action selection.
//!
//! The game samples instantaneous key-down state once per tick instead of
//! consuming an event queue. Crossterm only delivers events, and most
//! terminals never emit key releases, so `KeyStates` turns the event stream
//! into a held-key map with a short synthetic-release timeout: a key counts
//! as held until its last press/repeat event ages out or a real release
//! arrives.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::types::{GameAction, GameKey, KEY_RELEASE_TIMEOUT_MS};

/// Map a terminal key code onto a logical game key.
pub fn map_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameKey::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameKey::Down),
        KeyCode::Up | KeyCode::Char(' ') => Some(GameKey::Rotate),
        KeyCode::Enter => Some(GameKey::Start),
        _ => None,
    }
}

/// Instantaneous key-down state for the logical game keys.
#[derive(Debug, Clone)]
pub struct KeyStates {
    last_press: [Option<Instant>; GameKey::ALL.len()],
    release_timeout: Duration,
}

impl KeyStates {
    pub fn new() -> Self {
        Self::with_release_timeout(Duration::from_millis(KEY_RELEASE_TIMEOUT_MS))
    }

    pub fn with_release_timeout(release_timeout: Duration) -> Self {
        Self {
            last_press: [None; GameKey::ALL.len()],
            release_timeout,
        }
    }

    fn slot(key: GameKey) -> usize {
        GameKey::ALL.iter().position(|&k| k == key).unwrap_or(0)
    }

    /// Record a press or terminal auto-repeat event.
    pub fn key_down(&mut self, key: GameKey) {
        self.last_press[Self::slot(key)] = Some(Instant::now());
    }

    /// Record a real release event (terminals that support them).
    pub fn key_up(&mut self, key: GameKey) {
        self.last_press[Self::slot(key)] = None;
    }

    /// Instantaneous key-down query.
    pub fn is_active(&self, key: GameKey) -> bool {
        match self.last_press[Self::slot(key)] {
            Some(at) => at.elapsed() <= self.release_timeout,
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.last_press = [None; GameKey::ALL.len()];
    }
}

impl Default for KeyStates {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick at most one action from the held keys. The priority order is fixed
/// and mutually exclusive: left beats right beats down beats rotate; the
/// first held key wins.
pub fn select_action(mut is_active: impl FnMut(GameKey) -> bool) -> Option<GameAction> {
    if is_active(GameKey::Left) {
        Some(GameAction::MoveLeft)
    } else if is_active(GameKey::Right) {
        Some(GameAction::MoveRight)
    } else if is_active(GameKey::Down) {
        Some(GameAction::SoftDrop)
    } else if is_active(GameKey::Rotate) {
        Some(GameAction::Rotate)
    } else {
        None
    }
}
