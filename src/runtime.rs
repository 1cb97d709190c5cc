use std::sync::mpsc::{self, Receiver, RecvError};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the session loop.
#[derive(Clone, Debug)]
pub enum SprintEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of loop events (keyboard, resize, clock ticks).
pub trait EventSource {
    /// Blocks for the next event. Err means every producer hung up.
    fn next_event(&self) -> Result<SprintEvent, RecvError>;
}

/// Production event source: a crossterm reader thread and a fixed-interval
/// tick thread feed one channel. Ticks keep arriving whether or not keys do,
/// which is what keeps the tick-quantized session clock honest.
pub struct TermEvents {
    rx: Receiver<SprintEvent>,
}

impl TermEvents {
    pub fn spawn(tick_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let tick_tx = tx.clone();
        thread::spawn(move || loop {
            if tick_tx.send(SprintEvent::Tick).is_err() {
                break;
            }
            thread::sleep(tick_interval);
        });

        thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(SprintEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(SprintEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { rx }
    }
}

impl EventSource for TermEvents {
    fn next_event(&self) -> Result<SprintEvent, RecvError> {
        self.rx.recv()
    }
}

/// Test event source: the test owns the sender and injects an exact
/// interleaving of keys and ticks.
pub struct TestEvents {
    rx: Receiver<SprintEvent>,
}

impl TestEvents {
    pub fn new(rx: Receiver<SprintEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEvents {
    fn next_event(&self) -> Result<SprintEvent, RecvError> {
        self.rx.recv()
    }
}
