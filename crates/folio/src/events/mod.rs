//! Application event types.
//!
//! Defines the event enum used for communication between the input
//! thread, the one-shot dataset loader, and the main event loop.
//!
//! Events are sent via mpsc channels and processed sequentially
//! in the main loop to update app state and trigger re-renders.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::catalog::{Catalog, LoadError};

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    DataLoaded(Result<Catalog, LoadError>),
}
