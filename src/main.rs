//! Terminal falling-blocks runner.
//!
//! Drives the outer state machine: wait for a start key, play a session one
//! tick at a time, show the game-over banner, repeat. The terminal is
//! always restored on the way out, including error paths.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use blockfall::core::{Session, SimpleRng};
use blockfall::input::select_action;
use blockfall::term::{view, Console, TerminalConsole};
use blockfall::types::{GAME_OVER_PAUSE_MS, TICK_MS};

/// Why a play loop returned.
enum PlayOutcome {
    GameOver,
    Quit,
}

fn main() -> Result<()> {
    let mut console = TerminalConsole::new();
    console.enter()?;

    let result = run(&mut console);

    // Always try to restore terminal state.
    let _ = console.exit();
    result
}

fn run(console: &mut TerminalConsole) -> Result<()> {
    let mut last_score = 0;

    loop {
        if !await_start(console, last_score)? {
            return Ok(());
        }

        let seed = SimpleRng::from_time().next_u32();
        let mut session = Session::new(seed);
        let outcome = play(console, &mut session)?;
        last_score = session.score();

        match outcome {
            PlayOutcome::Quit => return Ok(()),
            PlayOutcome::GameOver => {
                view::draw_game_over(console)?;
                thread::sleep(Duration::from_millis(GAME_OVER_PAUSE_MS));
            }
        }
    }
}

/// Show the start screen and block (cooperatively, no busy polling) until
/// the start key. Returns `false` when the player quits instead.
fn await_start(console: &mut TerminalConsole, last_score: u32) -> Result<bool> {
    use blockfall::types::GameKey;

    view::draw_start_screen(console, last_score)?;
    loop {
        match console.wait_for_key()? {
            None => return Ok(false),
            Some(GameKey::Start) => {
                console.reset_input();
                return Ok(true);
            }
            Some(_) => {}
        }
    }
}

/// One session: sleep a fixed tick, sample input for at most one action,
/// advance the simulation, redraw.
fn play(console: &mut TerminalConsole, session: &mut Session) -> Result<PlayOutcome> {
    console.clear_screen()?;
    view::draw_screen(console, session)?;

    let tick = Duration::from_millis(TICK_MS);

    loop {
        thread::sleep(tick);

        console.pump_events()?;
        if console.quit_requested() {
            return Ok(PlayOutcome::Quit);
        }

        let action = select_action(|key| console.key_active(key));
        session.apply_input(action);

        let events = session.advance_tick();
        for &row in &events.cleared_rows {
            view::animate_row_clear(console, row)?;
        }

        view::draw_screen(console, session)?;

        if session.is_game_over() {
            return Ok(PlayOutcome::GameOver);
        }
    }
}
