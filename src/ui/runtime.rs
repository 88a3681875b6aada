use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::catalog::CatalogSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::{setup_terminal, Tui};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the interactive screen until the user quits.
///
/// Blocking. Must be entered from a tokio runtime context (for example via
/// `tokio::task::block_in_place`) so the activation can spawn its request.
pub fn run<S: CatalogSource>(mut app: App<S>) -> Result<()> {
    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE);

    app.start();
    let result = event_loop(&mut terminal, &mut app, &events);
    app.shutdown();

    drop(guard);
    result
}

fn event_loop<S: CatalogSource>(
    terminal: &mut Tui,
    app: &mut App<S>,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .context("Failed to draw frame")?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => app.on_tick(),
            // Next draw picks up the new size.
            Ok(AppEvent::Resize) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("Terminal event pump stopped");
                return Ok(());
            }
        }
    }
}
