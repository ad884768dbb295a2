//! Input event handling.
//!
//! Handles keyboard and mouse events, routing them to the carousel
//! while it is open, to the command bar while it is active, and to the
//! focused pane otherwise.

mod command;
mod event;
mod modal;
mod mouse;


pub use event::handle_event;
