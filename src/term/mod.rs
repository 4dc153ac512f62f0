//! Terminal layer: the console surface and the screen drawing code.
//!
//! Everything platform-specific lives behind the [`Console`] trait so the
//! core stays deterministic and the drawing code is testable against a
//! recording double.

pub mod console;
pub mod view;

pub use console::{Console, TerminalConsole};
