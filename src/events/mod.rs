//! Event system with bounded channels
//!
//! Terminal input and translation jobs share one bus, so the UI thread
//! only ever waits in a single place.

use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::event::{self, KeyEvent};
use std::time::Duration;
use translumen_core::JobEvent;

/// Application events - unified event type
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),

    /// Bracketed paste; a dropped file arrives this way as its path
    Paste(String),

    /// Terminal resize (width, height)
    Resize(u16, u16),

    /// Tick event for periodic updates
    Tick,

    /// Progress or result from a translation job
    Job(JobEvent),
}

impl From<JobEvent> for Event {
    fn from(event: JobEvent) -> Self {
        Event::Job(event)
    }
}

/// Event bus using bounded crossbeam channels
///
/// Bounded channels provide backpressure - if the receiver is slow,
/// senders will block, preventing unbounded memory growth.
pub struct EventBus {
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl EventBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        Self { tx, rx }
    }

    /// Get a sender clone for spawning event producers
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receive next event, blocking until available or timeout
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Event> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Drain up to max events from the queue
    pub fn drain(&self, max: usize) -> Vec<Event> {
        let mut events = Vec::with_capacity(max);
        while events.len() < max {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(_) => break,
            }
        }
        events
    }
}

/// Reader step after one `event::poll`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollStep {
    Read,
    Wait,
    Stop,
}

fn poll_step(polled: std::io::Result<bool>) -> PollStep {
    match polled {
        Ok(true) => PollStep::Read,
        Ok(false) => PollStep::Wait,
        Err(e) => {
            tracing::warn!(error = %e, "terminal input poll failed, reader stopped");
            PollStep::Stop
        }
    }
}

/// Spawn the thread that forwards crossterm input onto the bus
///
/// Exits when the bus is dropped or the terminal stops delivering events.
pub fn spawn_input_reader(tx: Sender<Event>) {
    std::thread::spawn(move || loop {
        match poll_step(event::poll(Duration::from_millis(100))) {
            PollStep::Read => {}
            PollStep::Wait => continue,
            PollStep::Stop => break,
        }
        let forwarded = match event::read() {
            Ok(event::Event::Key(key)) => tx.send(Event::Key(key)),
            Ok(event::Event::Paste(text)) => tx.send(Event::Paste(text)),
            Ok(event::Event::Resize(w, h)) => tx.send(Event::Resize(w, h)),
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "terminal input reader stopped");
                break;
            }
        };
        if forwarded.is_err() {
            break;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use translumen_core::LlmError;

    #[test]
    fn test_event_bus_bounded() {
        let bus = EventBus::new(10);

        for _ in 0..10 {
            bus.sender().try_send(Event::Tick).unwrap();
        }

        // 11th send should fail (channel full)
        assert!(bus.sender().try_send(Event::Tick).is_err());

        let events = bus.drain(50);
        assert_eq!(events.len(), 10);
    }

    #[test]
    fn test_poll_error_stops_reader() {
        assert_eq!(poll_step(Ok(true)), PollStep::Read);
        assert_eq!(poll_step(Ok(false)), PollStep::Wait);
        let err = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        assert_eq!(poll_step(Err(err)), PollStep::Stop);
    }

    #[test]
    fn test_drain_partial() {
        let bus = EventBus::new(100);

        for _ in 0..5 {
            bus.sender().try_send(Event::Tick).unwrap();
        }

        assert_eq!(bus.drain(3).len(), 3);
        assert_eq!(bus.drain(10).len(), 2);
        assert!(bus.drain(10).is_empty());
    }

    #[test]
    fn test_job_event_converts() {
        let event: Event = JobEvent::TextFinished(Err(LlmError::Timeout)).into();
        assert!(matches!(
            event,
            Event::Job(JobEvent::TextFinished(Err(LlmError::Timeout)))
        ));
    }
}
