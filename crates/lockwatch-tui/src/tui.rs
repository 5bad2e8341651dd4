//! Terminal lifecycle and input for the home screen.
//!
//! A single dashboard screen needs very little from the terminal: raw
//! mode with an alternate screen, a draw callback, and a stream of key
//! presses plus periodic ticks. Resize carries no payload because the
//! renderer always reads its size from the frame.

use std::io::{self, Stdout, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{FutureExt, StreamExt};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// A wrapper around the terminal that handles setup and teardown
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Enter raw mode and the alternate screen
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }

    /// Draw one frame
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Restore the terminal to its original state
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Best effort cleanup on drop
        let _ = self.restore();
    }
}

/// Terminal events the home screen reacts to
#[derive(Clone, Debug)]
pub enum Event {
    /// Terminal tick (for periodic updates)
    Tick,
    /// Key press event
    Key(KeyEvent),
    /// Terminal resized; the renderer re-reads the frame size
    Resize,
    /// Error occurred
    Error(String),
}

/// Map a raw crossterm event to a home screen event. Key releases and
/// anything else the screen has no use for map to None.
fn screen_event(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

/// Event handler managing terminal input
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Spawn the input pump with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(pump(sender, cancel.clone(), tick_rate));

        Self {
            receiver,
            cancel,
            task,
        }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Stop the input pump
    pub fn shutdown(self) {
        self.cancel.cancel();
        self.task.abort();
    }
}

/// Forward ticks and terminal input until cancelled or the receiver
/// goes away
async fn pump(
    sender: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
    tick_rate: Duration,
) {
    let mut input = event::EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return,

            _ = ticker.tick() => {
                if sender.send(Event::Tick).is_err() {
                    return;
                }
            }

            raw = input.next().fuse() => {
                let forwarded = match raw {
                    Some(Ok(evt)) => screen_event(evt),
                    Some(Err(e)) => Some(Event::Error(e.to_string())),
                    None => return,
                };
                if let Some(event) = forwarded {
                    if sender.send(event).is_err() {
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_key_press_forwarded() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let event = screen_event(CrosstermEvent::Key(key));
        assert!(matches!(event, Some(Event::Key(k)) if k.code == KeyCode::Char('j')));
    }

    #[test]
    fn test_key_release_dropped() {
        let mut key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(screen_event(CrosstermEvent::Key(key)).is_none());
    }

    #[test]
    fn test_resize_drops_dimensions() {
        let event = screen_event(CrosstermEvent::Resize(120, 40));
        assert!(matches!(event, Some(Event::Resize)));
    }

    #[test]
    fn test_focus_events_ignored() {
        assert!(screen_event(CrosstermEvent::FocusGained).is_none());
        assert!(screen_event(CrosstermEvent::FocusLost).is_none());
    }
}
