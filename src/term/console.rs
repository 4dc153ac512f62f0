//! The display/input surface.
//!
//! The game core talks to the terminal through the narrow [`Console`]
//! trait: draw a glyph at a screen coordinate, clear, query instantaneous
//! key state. [`TerminalConsole`] is the crossterm implementation; tests
//! substitute their own recording/scripted consoles.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    style::Print,
    terminal, QueueableCommand,
};

use crate::input::{map_key, KeyStates};
use crate::types::GameKey;

/// What the game needs from the platform: positioned glyph output and
/// instantaneous key-down queries. Implementations buffer writes until
/// `flush`.
pub trait Console {
    fn clear_screen(&mut self) -> Result<()>;

    fn put_glyph(&mut self, x: u16, y: u16, glyph: char) -> Result<()>;

    fn put_text(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        for (i, ch) in text.chars().enumerate() {
            self.put_glyph(x + i as u16, y, ch)?;
        }
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    /// Instantaneous key-down state for a logical key.
    fn key_active(&mut self, key: GameKey) -> bool;

    fn flush(&mut self) -> Result<()>;
}

/// Crossterm-backed console: raw mode + alternate screen while entered,
/// queued writes, and an event pump that maintains held-key state.
pub struct TerminalConsole {
    stdout: io::Stdout,
    keys: KeyStates,
    quit: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            keys: KeyStates::new(),
            quit: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drain all pending terminal events into the key-state map. Never
    /// blocks longer than the poll on an empty queue.
    pub fn pump_events(&mut self) -> Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                self.absorb_key_event(key);
            }
        }
        Ok(())
    }

    /// Block until a mapped game key is pressed; `None` means the player
    /// asked to quit. Used by the start screen so waiting costs no CPU.
    pub fn wait_for_key(&mut self) -> Result<Option<GameKey>> {
        loop {
            if let Event::Key(key) = event::read()? {
                self.absorb_key_event(key);
                if self.quit {
                    return Ok(None);
                }
                if key.kind != KeyEventKind::Release {
                    if let Some(game_key) = map_key(key.code) {
                        return Ok(Some(game_key));
                    }
                }
            }
        }
    }

    /// Whether the player pressed the quit key since the last reset.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn reset_input(&mut self) {
        self.keys.clear();
        self.quit = false;
    }

    fn absorb_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Release && is_quit_key(key.code) {
            self.quit = true;
            return;
        }
        let Some(game_key) = map_key(key.code) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.keys.key_down(game_key),
            KeyEventKind::Release => self.keys.key_up(game_key),
        }
    }
}

fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn clear_screen(&mut self) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn put_glyph(&mut self, x: u16, y: u16, glyph: char) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout.queue(Print(glyph))?;
        Ok(())
    }

    fn put_text(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout.queue(Print(text))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            self.stdout.queue(cursor::Show)?;
        } else {
            self.stdout.queue(cursor::Hide)?;
        }
        Ok(())
    }

    fn key_active(&mut self, key: GameKey) -> bool {
        self.keys.is_active(key)
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}
