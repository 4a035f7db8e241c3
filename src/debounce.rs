// src/debounce.rs
//
// Delays commit of a rapidly-changing value (the free-text search box) by a
// quiescence window. Only the last value of a burst is ever delivered, and
// exactly once per quiet period.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const QUIESCENCE_WINDOW: Duration = Duration::from_millis(300);

pub struct Debouncer {
    sender: Option<Sender<String>>,
    worker: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new<F>(handler: F) -> Self
    where
        F: FnMut(String) + Send + 'static,
    {
        Self::with_window(QUIESCENCE_WINDOW, handler)
    }

    pub fn with_window<F>(window: Duration, mut handler: F) -> Self
    where
        F: FnMut(String) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<String>();

        // One worker owns the single pending delivery. A value arriving
        // before the window elapses replaces the pending one and restarts
        // the window; the timeout is the only path that delivers.
        let worker = thread::spawn(move || {
            while let Ok(first) = receiver.recv() {
                let mut pending = first;
                loop {
                    match receiver.recv_timeout(window) {
                        Ok(newer) => pending = newer,
                        Err(RecvTimeoutError::Timeout) => {
                            handler(pending);
                            break;
                        }
                        // Gate dropped mid-window: the pending value is
                        // discarded, matching a page going away.
                        Err(RecvTimeoutError::Disconnected) => return,
                    }
                }
            }
        });

        Debouncer {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Schedules `value` for delivery after the quiescence window,
    /// cancelling any delivery still pending.
    pub fn commit(&self, value: impl Into<String>) {
        if let Some(sender) = &self.sender {
            // The worker only goes away on drop, so a send failure here
            // means shutdown is already underway.
            let _ = sender.send(value.into());
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
