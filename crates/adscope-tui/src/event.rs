//! Terminal input feed.
//!
//! A background task owns the crossterm [`EventStream`] and multiplexes
//! key presses, resizes, and the two timers (tick, frame) into a single
//! channel the app loop consumes.

use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// One unit of input for the app loop.
#[derive(Debug)]
pub enum Event {
    /// Key press (releases and repeats are filtered out).
    Key(KeyEvent),
    /// Terminal geometry changed.
    Resize(u16, u16),
    /// Coarse timer for counters and auto-refresh (4 Hz).
    Tick,
    /// Frame timer (~30 fps).
    Render,
}

/// Receiving half of the input feed; dropping it stops the reader task.
pub struct EventFeed {
    events: mpsc::UnboundedReceiver<Event>,
    stop: CancellationToken,
}

impl EventFeed {
    pub fn spawn(tick_every: Duration, frame_every: Duration) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let stop = CancellationToken::new();
        tokio::spawn(read_loop(tx, stop.clone(), tick_every, frame_every));
        Self { events, stop }
    }

    /// Next event, or `None` once the reader task is gone.
    pub async fn next(&mut self) -> Option<Event> {
        self.events.recv().await
    }
}

impl Drop for EventFeed {
    fn drop(&mut self) {
        self.stop.cancel();
    }
}

async fn read_loop(
    tx: mpsc::UnboundedSender<Event>,
    stop: CancellationToken,
    tick_every: Duration,
    frame_every: Duration,
) {
    let mut input = EventStream::new();
    let mut tick = tokio::time::interval(tick_every);
    let mut frame = tokio::time::interval(frame_every);
    // Skip missed deadlines rather than bursting to catch up
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    frame.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            () = stop.cancelled() => return,
            _ = tick.tick() => Some(Event::Tick),
            _ = frame.tick() => Some(Event::Render),
            next = input.next() => match next {
                Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    Some(Event::Key(key))
                }
                Some(Ok(TermEvent::Resize(cols, rows))) => Some(Event::Resize(cols, rows)),
                // Releases, repeats, mouse, focus, paste: nothing to do
                Some(Ok(_) | Err(_)) => None,
                None => return,
            },
        };
        if let Some(event) = event {
            if tx.send(event).is_err() {
                return;
            }
        }
    }
}
