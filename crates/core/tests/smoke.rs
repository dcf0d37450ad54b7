//! Smoke tests for the core crate.
//!
//! These tests verify that the shared plumbing works:
//! - Transcripts record lines in order
//! - Logging can be initialized from a test binary

use exercises_core::{telemetry, Transcript};

#[test]
fn smoke_transcript_records() {
    let mut out = Transcript::new("smoke");
    out.record("len:", 5).record("get:", 100);

    assert_eq!(out.len(), 2);
    assert_eq!(out.to_string(), "len: 5\nget: 100");
}

#[test]
fn smoke_transcript_display_values() {
    let mut out = Transcript::new("smoke");
    out.record("pi:", 3.5f64).record("flag:", true).record("s:", "text");

    assert_eq!(out.lines(), &["pi: 3.5", "flag: true", "s: text"]);
}

#[test]
fn smoke_logging_with_transcript() {
    telemetry::init();

    let mut out = Transcript::new("smoke");
    out.line("logged");
    assert_eq!(out.into_lines(), vec!["logged"]);
}
