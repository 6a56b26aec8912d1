//! Tests for report sinks

use pr_policy::sink::escape_workflow_data;
use pr_policy::{
    ConsoleSink, CountingSink, GithubAnnotationSink, Outcome, PolicyError, RecordingSink,
    ReportSink,
};
use std::io::{self, Write};

#[test]
fn recording_sink_keeps_order_and_kind() {
    let mut sink = RecordingSink::default();
    sink.warn("first").unwrap();
    sink.fail("second").unwrap();
    sink.warn("third").unwrap();

    assert_eq!(
        sink.messages(),
        [
            (Outcome::Warn, "first".to_string()),
            (Outcome::Fail, "second".to_string()),
            (Outcome::Warn, "third".to_string()),
        ]
    );
    assert_eq!(sink.warnings().collect::<Vec<_>>(), ["first", "third"]);
    assert!(sink.has_failures());
}

#[test]
fn console_sink_prefixes_lines() {
    let mut sink = ConsoleSink::new(Vec::new());
    sink.warn("Missing Summary").unwrap();
    sink.fail("Base Branch").unwrap();
    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(output, "WARN: Missing Summary\nFAIL: Base Branch\n");
}

#[test]
fn annotation_sink_emits_workflow_commands() {
    let mut sink = GithubAnnotationSink::new(Vec::new());
    sink.warn("50% done\nnext line").unwrap();
    sink.fail("blocked").unwrap();
    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(
        output,
        "::warning::50%25 done%0Anext line\n::error::blocked\n"
    );
}

#[test]
fn workflow_escaping_covers_carriage_returns() {
    assert_eq!(escape_workflow_data("a\r\nb"), "a%0D%0Ab");
}

#[test]
fn counting_sink_forwards_and_counts() {
    let mut sink = CountingSink::new(RecordingSink::default());
    sink.warn("w1").unwrap();
    sink.warn("w2").unwrap();
    sink.fail("f1").unwrap();
    assert_eq!(sink.warnings(), 2);
    assert_eq!(sink.failures(), 1);
    assert_eq!(sink.into_inner().messages().len(), 3);
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_errors_become_sink_errors() {
    let mut sink = CountingSink::new(ConsoleSink::new(BrokenPipe));
    let err = sink.fail("blocked").unwrap_err();
    assert!(matches!(err, PolicyError::Sink(_)));
    assert_eq!(sink.failures(), 0);
}
