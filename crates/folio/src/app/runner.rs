//! Application runner and event loop.
//!
//! Handles terminal setup/teardown and the main event loop.
//! Events are read from an mpsc channel and dispatched to handlers.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::events::AppEvent;
use crate::session::SessionOptions;

use super::state::{App, Keybindings};

/// Everything the runner needs from the command line and config.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub data_path: PathBuf,
    pub config: Config,
    pub session: SessionOptions,
}

/// Entry point: set up terminal and run the event loop.
pub fn run(options: RunOptions) -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
        ))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, options);

    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    if enhanced {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)?;
    }
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop: process events until quit.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    options: RunOptions,
) -> io::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_input_thread(event_tx.clone());
    spawn_loader_thread(event_tx, options.data_path);

    let keys = Keybindings::from_config(&options.config.keymap);
    let mut app = App::new(keys, options.session);
    terminal.clear()?;
    terminal.draw(|frame| super::render::render(&mut app, frame))?;

    while !app.should_quit {
        let event = match event_rx.recv() {
            Ok(event) => event,
            Err(_) => break,
        };
        super::input::handle_event(&mut app, event);
        // Drain any pending events before redraw
        while let Ok(event) = event_rx.try_recv() {
            super::input::handle_event(&mut app, event);
        }

        terminal.draw(|frame| super::render::render(&mut app, frame))?;
    }
    log::info!("exiting");
    Ok(())
}

/// Spawn a thread to read terminal input events.
fn spawn_input_thread(sender: Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if sender.send(AppEvent::Input(key)).is_err() {
                    break;
                }
            }
            Ok(Event::Mouse(mouse)) => {
                if sender.send(AppEvent::Mouse(mouse)).is_err() {
                    break;
                }
            }
            Ok(Event::Resize(_, _)) => {
                if sender.send(AppEvent::Resize).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}

/// Load the dataset once, off the UI thread.
fn spawn_loader_thread(sender: Sender<AppEvent>, data_path: PathBuf) {
    std::thread::spawn(move || {
        log::debug!("loading {}", data_path.display());
        let result = Catalog::load(&data_path);
        let _ = sender.send(AppEvent::DataLoaded(result));
    });
}
