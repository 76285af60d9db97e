//! The cursor menu shown on the display panel.
//!
//! The menu never acts on its own: activating an option yields the [`Command`] the
//! dispatcher should run, exactly as if it had been typed.
//!
//! [`Command`]: crate::command_control::Command

mod menu_controller;
mod screen;


pub use menu_controller::{CursorMove, MenuController, MenuState, MenuView};
pub use screen::{MainOption, MenuAction, PathIntent, Screen};
