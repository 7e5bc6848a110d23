/// Keyboard input thread
///
/// Terminal events block, so polling lives on a dedicated OS thread that
/// feeds the async event loop over the shared channel. A poll timeout
/// doubles as the tick that drives notice pruning.

use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;

use crate::commands::AppEvent;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Spawns the input thread. It exits on its own once the receiving side
/// of the channel is dropped.
pub fn spawn(events: UnboundedSender<AppEvent>) {
    thread::spawn(move || loop {
        let event = match event::poll(POLL_INTERVAL) {
            Ok(true) => match event::read() {
                // Release/repeat events would double every keystroke on Windows
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "terminal input read failed");
                    break;
                }
            },
            Ok(false) => AppEvent::Tick,
            Err(err) => {
                tracing::error!(error = %err, "terminal input poll failed");
                break;
            }
        };
        if events.send(event).is_err() {
            break;
        }
    });
}
