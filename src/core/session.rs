//! Session controller: one game of falling blocks.
//!
//! `Session` owns the board, the falling and preview shapes, the score and
//! the tick counters. The outer loop feeds it at most one action per tick
//! via [`Session::apply_input`] and advances simulation time via
//! [`Session::advance_tick`]; everything else (spawning, locking, line
//! clears, game over) happens inside.
//!
//! Rejected moves and rotations are normal outcomes, not errors: a request
//! that would collide simply returns `false` and changes nothing.

use arrayvec::ArrayVec;

use crate::core::board::{Board, MAX_CLEARED_ROWS};
use crate::core::rng::SimpleRng;
use crate::core::shapes::{Shape, SQUARE};
use crate::types::{
    GameAction, BLOCK_GLYPH, BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_TICKS, LINE_SCORE,
    ROTATE_DEBOUNCE_TICKS, SHAPE_SIZE, SPAWN_X, SPAWN_Y,
};

/// What happened during one [`Session::advance_tick`] call.
#[derive(Debug, Clone, Default)]
pub struct TickEvents {
    /// The gravity step fired this tick (piece descended or locked).
    pub gravity_applied: bool,
    /// The piece locked into the board and a new one spawned.
    pub locked: bool,
    /// Interior rows cleared by the lock, in detection order.
    pub cleared_rows: ArrayVec<usize, MAX_CLEARED_ROWS>,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    current: Shape,
    next: Shape,
    x: i8,
    y: i8,
    score: u32,
    game_over: bool,
    gravity_tick: u32,
    rotate_cooldown: u32,
    rng: SimpleRng,
}

impl Session {
    /// Fresh session: empty bordered board, a random falling shape placed at
    /// the spawn coordinate, and a random preview shape.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let first = rng.draw_shape();
        let next = rng.draw_shape();
        let mut session = Self {
            board: Board::new(BOARD_WIDTH, BOARD_HEIGHT),
            current: first,
            next,
            x: SPAWN_X,
            y: SPAWN_Y,
            score: 0,
            game_over: false,
            gravity_tick: 0,
            // Start ready so the first rotation is not swallowed.
            rotate_cooldown: ROTATE_DEBOUNCE_TICKS,
            rng,
        };
        session.spawn(first);
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for scenario setup in tests and tools.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_shape(&self) -> &Shape {
        &self.current
    }

    pub fn next_shape(&self) -> &Shape {
        &self.next
    }

    /// Top-left of the falling shape's 4x4 box, in board coordinates.
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Place `shape` at the fixed spawn coordinate and lift it while the
    /// position one row above is still free, so a shape with empty leading
    /// box rows starts with its topmost filled cell against the top border.
    /// If even the lifted position overlaps existing content the session
    /// ends.
    pub fn spawn(&mut self, shape: Shape) {
        self.current = shape;
        self.x = SPAWN_X;
        self.y = SPAWN_Y;
        while !self.board.collides(&self.current, self.x, self.y - 1) {
            self.y -= 1;
        }
        if self.board.collides(&self.current, self.x, self.y) {
            self.game_over = true;
        }
    }

    /// Apply at most one player action. Must be called exactly once per tick
    /// whether or not a key is held: the rotation debounce counter advances
    /// here.
    pub fn apply_input(&mut self, action: Option<GameAction>) -> bool {
        self.rotate_cooldown = self.rotate_cooldown.saturating_add(1);
        if self.game_over {
            return false;
        }
        match action {
            Some(GameAction::MoveLeft) => self.try_shift(-1, 0),
            Some(GameAction::MoveRight) => self.try_shift(1, 0),
            Some(GameAction::SoftDrop) => self.try_shift(0, 1),
            Some(GameAction::Rotate) => {
                if self.rotate_cooldown < ROTATE_DEBOUNCE_TICKS {
                    return false;
                }
                self.rotate_cooldown = 0;
                self.rotate_current()
            }
            None => false,
        }
    }

    /// Advance the tick counter; every `GRAVITY_TICKS` ticks the piece
    /// descends one row or, if blocked, locks in place, full rows clear,
    /// and the preview shape takes over.
    pub fn advance_tick(&mut self) -> TickEvents {
        let mut events = TickEvents::default();
        if self.game_over {
            return events;
        }

        self.gravity_tick += 1;
        if self.gravity_tick < GRAVITY_TICKS {
            return events;
        }
        self.gravity_tick = 0;
        events.gravity_applied = true;

        if !self.board.collides(&self.current, self.x, self.y + 1) {
            self.y += 1;
            return events;
        }

        self.lock_current();
        events.locked = true;
        events.cleared_rows = self.board.clear_full_rows();
        self.score += LINE_SCORE * events.cleared_rows.len() as u32;

        let promoted = self.next;
        self.next = self.rng.draw_shape();
        self.spawn(promoted);
        events
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.board.collides(&self.current, self.x + dx, self.y + dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate the falling shape in place, unless it is the square template
    /// or the rotated form would collide. Rejection leaves the shape
    /// untouched; nothing is queued or retried.
    fn rotate_current(&mut self) -> bool {
        if self.current == SQUARE {
            return false;
        }
        let rotated = self.current.rotated();
        if self.board.collides(&rotated, self.x, self.y) {
            return false;
        }
        self.current = rotated;
        true
    }

    /// Merge every filled cell of the falling shape into the board. The
    /// write-if-empty policy of the board keeps borders and earlier pieces
    /// intact.
    fn lock_current(&mut self) {
        for row in 0..SHAPE_SIZE {
            for col in 0..SHAPE_SIZE {
                if self.current.filled(col, row) {
                    self.board
                        .write_cell(self.x + col as i8, self.y + row as i8, BLOCK_GLYPH);
                }
            }
        }
    }
}
