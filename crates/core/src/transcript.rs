//! # Transcript - Demo Output as a Value
//!
//! A demo run records what it would print instead of printing directly.
//! The example binary decides when to flush it to stdout; tests compare the
//! recorded lines against the expected output.
//!
//! ```rust
//! use exercises_core::Transcript;
//!
//! let mut out = Transcript::new("arrays");
//! out.record("len:", 5);
//! out.line("done");
//! assert_eq!(out.lines(), &["len: 5", "done"]);
//! ```

use std::fmt;

use tracing::debug;

/// Ordered console lines produced by one demo run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// Name of the demo, used as the tracing target field.
    topic: &'static str,
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript for the named demo.
    pub fn new(topic: &'static str) -> Self {
        Self {
            topic,
            lines: Vec::new(),
        }
    }

    /// Append a raw line.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        debug!(topic = self.topic, line = %text, "transcript line");
        self.lines.push(text);
        self
    }

    /// Append `label value`, separated by a single space.
    pub fn record(&mut self, label: &str, value: impl fmt::Display) -> &mut Self {
        self.line(format!("{} {}", label, value))
    }

    /// Append every line of another transcript.
    pub fn extend(&mut self, other: Transcript) -> &mut Self {
        for text in other.lines {
            self.line(text);
        }
        self
    }

    /// The demo this transcript belongs to.
    pub fn topic(&self) -> &'static str {
        self.topic
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Write every line to stdout.
    pub fn print(&self) {
        for text in &self.lines {
            println!("{}", text);
        }
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, text) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", text)?;
        }
        Ok(())
    }
}
