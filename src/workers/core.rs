//! Core worker utilities

use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType, Worker};
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    /// Progress note from a worker; dropped when below the display threshold.
    pub async fn send_progress(&self, worker: Worker, message: String, log_level: LogLevel) {
        let event = Event::with_level(worker, message, EventType::Waiting, log_level);
        if event.should_display() {
            self.send_event(event).await;
        }
    }
}
