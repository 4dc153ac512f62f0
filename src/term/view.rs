//! Screen layout: board, falling piece, preview panel, score and the
//! start/game-over screens, all drawn through the [`Console`] surface.
//!
//! The board occupies a fixed rectangle at (`W_PADDING`, `H_PADDING`); the
//! score and the "next piece" panel sit to its right.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::core::{Session, Shape};
use crate::term::console::Console;
use crate::types::{
    BLOCK_GLYPH, BOARD_WIDTH, CLEAR_CELL_DELAY_MS, EMPTY_GLYPH, H_PADDING, SHAPE_SIZE, W_PADDING,
};

/// Left edge of the side panel, just past the board.
fn panel_x() -> u16 {
    2 * W_PADDING + BOARD_WIDTH as u16
}

/// Redraw the whole playing screen for the current session state.
pub fn draw_screen<C: Console>(console: &mut C, session: &Session) -> Result<()> {
    draw_board(console, session)?;
    let (x, y) = session.position();
    draw_piece(console, session.current_shape(), x, y)?;
    draw_score(console, session.score())?;
    draw_next(console, session.next_shape())?;
    console.flush()
}

/// Draw every board cell, border ring included.
pub fn draw_board<C: Console>(console: &mut C, session: &Session) -> Result<()> {
    let board = session.board();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let glyph = board
                .get(x as i8, y as i8)
                .map(|cell| cell.glyph())
                .unwrap_or(EMPTY_GLYPH);
            console.put_glyph(W_PADDING + x as u16, H_PADDING + y as u16, glyph)?;
        }
    }
    Ok(())
}

/// Draw only the filled cells of the falling shape at its board position.
pub fn draw_piece<C: Console>(console: &mut C, shape: &Shape, x: i8, y: i8) -> Result<()> {
    for row in 0..SHAPE_SIZE {
        for col in 0..SHAPE_SIZE {
            if !shape.filled(col, row) {
                continue;
            }
            let sx = W_PADDING as i32 + (x as i32 + col as i32);
            let sy = H_PADDING as i32 + (y as i32 + row as i32);
            if sx >= 0 && sy >= 0 {
                console.put_glyph(sx as u16, sy as u16, BLOCK_GLYPH)?;
            }
        }
    }
    Ok(())
}

/// Score readout at the top of the side panel.
pub fn draw_score<C: Console>(console: &mut C, score: u32) -> Result<()> {
    console.put_text(panel_x(), H_PADDING, &format!("SCORE: {}", score))
}

/// Preview panel. All 16 box cells are drawn, empty ones included, so a
/// smaller next shape erases the previous one.
pub fn draw_next<C: Console>(console: &mut C, shape: &Shape) -> Result<()> {
    let x = panel_x();
    console.put_text(x, H_PADDING + 5, "Next piece:")?;
    for row in 0..SHAPE_SIZE {
        for col in 0..SHAPE_SIZE {
            let glyph = if shape.filled(col, row) {
                BLOCK_GLYPH
            } else {
                EMPTY_GLYPH
            };
            console.put_glyph(
                x + 3 + col as u16,
                H_PADDING + 7 + row as u16,
                glyph,
            )?;
        }
    }
    Ok(())
}

/// Cosmetic left-to-right wipe over a cleared row. The grid has already
/// shifted when this runs; the delay only paces the visual.
pub fn animate_row_clear<C: Console>(console: &mut C, row: usize) -> Result<()> {
    for x in 1..BOARD_WIDTH - 1 {
        console.put_glyph(W_PADDING + x as u16, H_PADDING + row as u16, EMPTY_GLYPH)?;
        console.flush()?;
        if CLEAR_CELL_DELAY_MS > 0 {
            thread::sleep(Duration::from_millis(CLEAR_CELL_DELAY_MS));
        }
    }
    Ok(())
}

/// Start screen: last session's score and the start prompt.
pub fn draw_start_screen<C: Console>(console: &mut C, last_score: u32) -> Result<()> {
    console.clear_screen()?;
    console.put_text(0, 0, &format!("Your last score was: {}", last_score))?;
    console.put_text(0, 1, "Press Enter to start a new game...")?;
    console.put_text(0, 3, "Arrows/WASD move, Space rotates, Q quits.")?;
    console.flush()
}

pub fn draw_game_over<C: Console>(console: &mut C) -> Result<()> {
    console.clear_screen()?;
    console.put_text(0, 0, "GAME OVER!!! THANK YOU FOR PLAYING!!!")?;
    console.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CATALOG;
    use crate::types::{BOARD_HEIGHT, BORDER_GLYPH, GameKey};

    /// Console double that records glyphs into a character grid.
    struct RecordingConsole {
        grid: Vec<Vec<char>>,
    }

    impl RecordingConsole {
        fn new() -> Self {
            Self {
                grid: vec![vec![' '; 80]; 40],
            }
        }

        fn at(&self, x: u16, y: u16) -> char {
            self.grid[y as usize][x as usize]
        }

        fn row_text(&self, y: u16) -> String {
            self.grid[y as usize].iter().collect::<String>().trim_end().to_string()
        }
    }

    impl Console for RecordingConsole {
        fn clear_screen(&mut self) -> Result<()> {
            for row in &mut self.grid {
                row.fill(' ');
            }
            Ok(())
        }

        fn put_glyph(&mut self, x: u16, y: u16, glyph: char) -> Result<()> {
            if (y as usize) < self.grid.len() && (x as usize) < self.grid[0].len() {
                self.grid[y as usize][x as usize] = glyph;
            }
            Ok(())
        }

        fn set_cursor_visible(&mut self, _visible: bool) -> Result<()> {
            Ok(())
        }

        fn key_active(&mut self, _key: GameKey) -> bool {
            false
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn board_draws_border_ring_at_padded_origin() {
        let mut console = RecordingConsole::new();
        let session = Session::new(1);
        draw_board(&mut console, &session).unwrap();

        for x in 0..BOARD_WIDTH as u16 {
            assert_eq!(console.at(W_PADDING + x, H_PADDING), BORDER_GLYPH);
            assert_eq!(
                console.at(W_PADDING + x, H_PADDING + BOARD_HEIGHT as u16 - 1),
                BORDER_GLYPH
            );
        }
        for y in 0..BOARD_HEIGHT as u16 {
            assert_eq!(console.at(W_PADDING, H_PADDING + y), BORDER_GLYPH);
            assert_eq!(
                console.at(W_PADDING + BOARD_WIDTH as u16 - 1, H_PADDING + y),
                BORDER_GLYPH
            );
        }
        // Interior starts empty.
        assert_eq!(console.at(W_PADDING + 1, H_PADDING + 1), EMPTY_GLYPH);
    }

    #[test]
    fn piece_draws_only_filled_cells() {
        let mut console = RecordingConsole::new();
        let bar = CATALOG[2];
        draw_piece(&mut console, &bar, 4, 1).unwrap();

        // The vertical bar fills box column 1, rows 0..4.
        for row in 0..SHAPE_SIZE as u16 {
            assert_eq!(
                console.at(W_PADDING + 4 + 1, H_PADDING + 1 + row),
                BLOCK_GLYPH
            );
            assert_eq!(console.at(W_PADDING + 4, H_PADDING + 1 + row), ' ');
        }
    }

    #[test]
    fn score_and_preview_sit_right_of_the_board() {
        let mut console = RecordingConsole::new();
        draw_score(&mut console, 300).unwrap();
        draw_next(&mut console, &CATALOG[3]).unwrap();

        assert_eq!(console.row_text(H_PADDING).trim_start(), "SCORE: 300");
        assert!(console.row_text(H_PADDING + 5).contains("Next piece:"));
        // Square preview: box cols 1-2, rows 0-1.
        let x = panel_x();
        assert_eq!(console.at(x + 3 + 1, H_PADDING + 7), BLOCK_GLYPH);
        assert_eq!(console.at(x + 3 + 2, H_PADDING + 7 + 1), BLOCK_GLYPH);
        assert_eq!(console.at(x + 3, H_PADDING + 7), EMPTY_GLYPH);
    }

    #[test]
    fn start_screen_shows_last_score() {
        let mut console = RecordingConsole::new();
        draw_start_screen(&mut console, 1200).unwrap();
        assert_eq!(console.row_text(0), "Your last score was: 1200");
        assert!(console.row_text(1).starts_with("Press Enter"));
    }
}
