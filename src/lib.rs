//! blockfall: a terminal falling-block puzzle game.
//!
//! The crate splits into a pure simulation core (`core`), key handling
//! (`input`) and a thin terminal surface (`term`); the binary wires them
//! into the start/play/game-over loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
