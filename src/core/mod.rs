//! Core module - pure game logic with no terminal dependencies
//!
//! Board model, shape catalog, randomness and the session state machine.
//! Nothing in here performs I/O, which keeps the whole game simulatable in
//! tests.

pub mod board;
pub mod rng;
pub mod session;
pub mod shapes;

pub use board::Board;
pub use rng::SimpleRng;
pub use session::{Session, TickEvents};
pub use shapes::{Shape, CATALOG, SQUARE};
