use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Blocking UI loop. Runs on the main thread; the poller and analytics
/// workers live on the async runtime and feed the same event channel.
pub fn run(mut app: App, events: EventHandler, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw reads the new size from the backend.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Snapshot(update)) => app.apply_update(update),
            Ok(AppEvent::PollFailed { seq, error }) => app.record_poll_failure(seq, error),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
