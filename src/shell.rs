//! Line-oriented calculator shell.
//!
//! Maps each completed input line to exactly one response line.

use core::fmt::Write;

use crate::expr;
use crate::serial::{ByteSink, SinkWriter};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Print the startup banner: two fixed lines, once at boot.
pub fn print_banner(out: &mut dyn ByteSink) {
    out.write_str("Simple UART Calculator ");
    out.write_line(VERSION);
    out.write_line("Enter a mathematical expression with 2 operands (e.g., 2 + 3):");
}

/// Evaluate one completed line and write the response.
///
/// One evaluation per line; the three-way outcome picks the response.
/// Expression errors are never fatal and leave no state behind.
pub fn respond(line: &str, out: &mut dyn ByteSink) {
    match expr::evaluate(line) {
        Ok(value) => {
            let _ = write!(SinkWriter(out), "Result: {}", value);
            out.write_str("\r\n");
        }
        Err(err) => out.write_line(err.message()),
    }
}
