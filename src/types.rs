//! Core types shared across the application
//! This module contains pure data types and compile-time configuration.

/// Board dimensions, border ring included
pub const BOARD_WIDTH: usize = 12;
pub const BOARD_HEIGHT: usize = 22;

/// Screen offset of the board's top-left corner
pub const W_PADDING: u16 = 2;
pub const H_PADDING: u16 = 1;

/// Glyphs
pub const BORDER_GLYPH: char = '#';
pub const EMPTY_GLYPH: char = ' ';
pub const BLOCK_GLYPH: char = 'X';

/// Shape bounding box is always 4x4
pub const SHAPE_SIZE: usize = 4;
pub const SHAPE_COUNT: usize = 7;

/// Game timing: one loop iteration sleeps TICK_MS, gravity fires every
/// GRAVITY_TICKS iterations, rotation needs ROTATE_DEBOUNCE_TICKS between
/// accepted inputs.
pub const TICK_MS: u64 = 50;
pub const GRAVITY_TICKS: u32 = 15;
pub const ROTATE_DEBOUNCE_TICKS: u32 = 5;

/// Score awarded per cleared line
pub const LINE_SCORE: u32 = 100;

/// Fixed spawn coordinate for a fresh piece (top-left of its 4x4 box)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2 - SHAPE_SIZE / 2) as i8;
pub const SPAWN_Y: i8 = 1;

/// Synthetic key release for terminals that do not emit release events
pub const KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Per-cell delay of the line-clear wipe. Cosmetic only.
pub const CLEAR_CELL_DELAY_MS: u64 = 15;

/// Pause on the game-over banner before returning to the start screen
pub const GAME_OVER_PAUSE_MS: u64 = 1000;

/// Cell on the board. The border ring is stamped once at initialization and
/// is distinct from both empty and locked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Border,
    Block(char),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Glyph used when drawing this cell
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Border => BORDER_GLYPH,
            Cell::Block(ch) => ch,
        }
    }
}

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Down,
    Rotate,
    Start,
}

impl GameKey {
    pub const ALL: [GameKey; 5] = [
        GameKey::Left,
        GameKey::Right,
        GameKey::Down,
        GameKey::Rotate,
        GameKey::Start,
    ];
}

/// Game actions, at most one applied per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}
