//! Debounced search input.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::debounce::Debouncer;

/// Free-text search box.
///
/// Keystrokes go through [`input`](Self::input) and surface from
/// [`next_query`](Self::next_query) once typing pauses. The box does not
/// decide whether a settled query is new; the listing it feeds does.
pub struct SearchBox {
    debouncer: Debouncer<String>,
    settled: mpsc::UnboundedReceiver<String>,
    text: String,
}

impl SearchBox {
    /// Create a box that settles after `delay` without input.
    pub fn new(delay: Duration) -> Self {
        let (tx, settled) = mpsc::unbounded_channel();
        let debouncer = Debouncer::new(delay, move |query: String| {
            // Receiver gone means the box was dropped.
            let _ = tx.send(query);
        });

        Self {
            debouncer,
            settled,
            text: String::new(),
        }
    }

    /// Current input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record a keystroke.
    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.debouncer.call(self.text.clone());
    }

    /// Show `query` without scheduling it (the listing already has it).
    pub fn sync(&mut self, query: &str) {
        if self.text != query {
            self.text = query.to_string();
        }
    }

    /// Wait for the next settled query.
    ///
    /// Pends until the user types and pauses; pair with a timeout or
    /// `select!` when nothing may be typed.
    pub async fn next_query(&mut self) -> Option<String> {
        let query = self.settled.recv().await?;
        debug!(query = %query, "search settled");
        Some(query)
    }

    /// Non-blocking variant of [`next_query`](Self::next_query).
    pub fn try_next_query(&mut self) -> Option<String> {
        self.settled.try_recv().ok()
    }

    /// Apply the current text now: trims it and drops the pending debounce.
    pub fn submit(&mut self) -> String {
        self.discard_pending();
        let query = self.text.trim().to_string();
        debug!(query = %query, "search submitted");
        self.text = query.clone();
        query
    }

    /// Drop the pending debounce (e.g. on navigation).
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    /// Cancel pending input and clear the text.
    pub fn reset(&mut self) {
        self.discard_pending();
        self.text.clear();
    }

    fn discard_pending(&mut self) {
        self.debouncer.cancel();
        while self.settled.try_recv().is_ok() {}
    }
}
