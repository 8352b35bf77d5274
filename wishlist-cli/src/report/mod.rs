//! User-facing status channel
//!
//! Operations that must not fail outward report what went wrong here and hand
//! back a plain success indicator instead.

use colored::*;

/// Sink for user-visible status messages
pub trait Reporter {
    fn error(&self, message: &str);
    fn success(&self, message: &str);
    fn info(&self, message: &str);
}

/// Writes messages to the terminal: errors to stderr, the rest to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".bright_red().bold(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".bright_green().bold(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

#[cfg(test)]
pub use recording::RecordingReporter;
