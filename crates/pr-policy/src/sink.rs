//! Report sinks
//!
//! The checker hands every rendered finding to a sink through `warn` or
//! `fail`. A sink error aborts the evaluation and reaches the caller.

use serde::Serialize;
use std::io::Write;

use crate::{PolicyError, Result};

/// Output capability receiving advisory and blocking messages
pub trait ReportSink {
    /// Record an advisory, non-blocking message
    fn warn(&mut self, message: &str) -> Result<()>;

    /// Record a blocking message
    fn fail(&mut self, message: &str) -> Result<()>;
}

/// Kind of message a sink received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Warn,
    Fail,
}

/// In-memory sink keeping messages in the order they were reported
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    messages: Vec<(Outcome, String)>,
}

impl RecordingSink {
    pub fn messages(&self) -> &[(Outcome, String)] {
        &self.messages
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.with_outcome(Outcome::Warn)
    }

    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.with_outcome(Outcome::Fail)
    }

    pub fn has_failures(&self) -> bool {
        self.messages.iter().any(|(o, _)| *o == Outcome::Fail)
    }

    fn with_outcome(&self, outcome: Outcome) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(move |(o, _)| *o == outcome)
            .map(|(_, m)| m.as_str())
    }
}

impl ReportSink for RecordingSink {
    fn warn(&mut self, message: &str) -> Result<()> {
        self.messages.push((Outcome::Warn, message.to_string()));
        Ok(())
    }

    fn fail(&mut self, message: &str) -> Result<()> {
        self.messages.push((Outcome::Fail, message.to_string()));
        Ok(())
    }
}

/// Forwards to an inner sink while counting what passed through
pub struct CountingSink<S> {
    inner: S,
    warnings: usize,
    failures: usize,
}

impl<S: ReportSink> CountingSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            warnings: 0,
            failures: 0,
        }
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ReportSink> ReportSink for CountingSink<S> {
    fn warn(&mut self, message: &str) -> Result<()> {
        self.inner.warn(message)?;
        self.warnings += 1;
        Ok(())
    }

    fn fail(&mut self, message: &str) -> Result<()> {
        self.inner.fail(message)?;
        self.failures += 1;
        Ok(())
    }
}

/// Plain-text sink writing `WARN: ...` / `FAIL: ...` lines
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "WARN: {message}").map_err(sink_error)
    }

    fn fail(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "FAIL: {message}").map_err(sink_error)
    }
}

/// Sink emitting GitHub Actions workflow commands
///
/// Warnings become `::warning::` annotations and failures `::error::`.
pub struct GithubAnnotationSink<W: Write> {
    writer: W,
}

impl<W: Write> GithubAnnotationSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for GithubAnnotationSink<W> {
    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "::warning::{}", escape_workflow_data(message)).map_err(sink_error)
    }

    fn fail(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "::error::{}", escape_workflow_data(message)).map_err(sink_error)
    }
}

/// Escape message data for a workflow command
pub fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn sink_error(err: std::io::Error) -> PolicyError {
    PolicyError::Sink(err.to_string())
}
