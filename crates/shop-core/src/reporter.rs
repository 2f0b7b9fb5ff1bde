//! # Reporter
//!
//! The side-effect sink every strategy writes its human-readable message to.
//! Strategies never print directly; the caller decides where messages go.

use std::sync::Mutex;

/// Sink for strategy messages.
pub trait Reporter: Send + Sync {
    /// Emit one message.
    fn report(&self, message: &str);
}

/// Writes each message as a line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, message: &str) {
        println!("{message}");
    }
}

/// Forwards messages to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, message: &str) {
        tracing::info!(target: "strategy_cart::report", "{}", message);
    }
}

/// Keeps every message in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages reported so far
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
