// SPDX-License-Identifier: Apache-2.0

//! Result sinks.
//!
//! A sink is whatever consumes a finished call: a terminal, a log, a channel
//! feeding some UI. The executor hands every result to its sink exactly once
//! and never looks at it again.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::graphql::QueryResult;

/// Consumer of completed calls.
pub trait ResultSink: Send + Sync {
    /// Takes ownership of one terminal result.
    fn display(&self, result: QueryResult);
}

impl<F> ResultSink for F
where
    F: Fn(QueryResult) + Send + Sync,
{
    fn display(&self, result: QueryResult) {
        self(result);
    }
}

/// JSON layout used by [`WriterSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indented, multi-line.
    #[default]
    Pretty,
    /// One line per result.
    Compact,
}

/// Renders a result as JSON text (no trailing newline).
#[must_use]
pub fn render_json(result: &QueryResult, style: JsonStyle) -> String {
    let value = result.to_display_value();
    let rendered = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(&value),
        JsonStyle::Compact => serde_json::to_string(&value),
    };
    // Serializing a `Value` cannot fail.
    rendered.unwrap_or_default()
}

/// Writes each result as JSON to a writer, one document per result.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    style: JsonStyle,
}

impl<W: Write + Send> WriterSink<W> {
    /// Creates a sink writing pretty JSON.
    pub fn new(writer: W) -> Self {
        Self::with_style(writer, JsonStyle::Pretty)
    }

    /// Creates a sink with an explicit JSON layout.
    pub fn with_style(writer: W, style: JsonStyle) -> Self {
        Self {
            writer: Mutex::new(writer),
            style,
        }
    }

    /// Returns the writer, consuming the sink.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> ResultSink for WriterSink<W> {
    fn display(&self, result: QueryResult) {
        let text = render_json(&result, self.style);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{text}").and_then(|()| writer.flush()) {
            warn!(error = %e, "Failed to write result");
        }
    }
}

/// Forwards results into an unbounded channel, in completion order.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<QueryResult>,
}

impl ChannelSink {
    /// Creates a sink and the receiver that will observe its results.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<QueryResult>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ResultSink for ChannelSink {
    fn display(&self, result: QueryResult) {
        if self.tx.send(result).is_err() {
            debug!("Result receiver dropped, discarding result");
        }
    }
}

/// Keeps every result in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    results: Mutex<Vec<QueryResult>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of results received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// A copy of everything received, in arrival order.
    #[must_use]
    pub fn results(&self) -> Vec<QueryResult> {
        self.lock().clone()
    }

    /// Drains the received results.
    #[must_use]
    pub fn take(&self) -> Vec<QueryResult> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<QueryResult>> {
        self.results.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResultSink for MemorySink {
    fn display(&self, result: QueryResult) {
        self.lock().push(result);
    }
}
