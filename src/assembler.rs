//! Byte-stream to line assembly.
//!
//! Runs in the receive context: one call per incoming byte, local echo,
//! completed lines handed to the queue. Nothing here blocks.

use crate::line::LineBuffer;
use crate::queue::LineQueue;
use crate::serial::ByteSink;

/// Line assembly state machine.
///
/// Owns the receive buffer; the buffer and cursor are touched only from
/// this single callback context.
pub struct LineAssembler {
    line: LineBuffer,
}

impl LineAssembler {
    /// Create an assembler with an empty buffer.
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
        }
    }

    /// Feed one received byte.
    ///
    /// Terminators complete the pending line (echoing CRLF), other bytes
    /// are stored and echoed while the buffer has room and silently
    /// discarded once it is full.
    pub fn on_byte<const N: usize>(
        &mut self,
        byte: u8,
        queue: &LineQueue<N>,
        echo: &mut dyn ByteSink,
    ) {
        match byte {
            b'\r' | b'\n' => {
                // Ignore the second half of a CRLF pair
                if self.line.is_empty() {
                    return;
                }

                echo.write_byte(b'\r');
                echo.write_byte(b'\n');

                // A full queue drops the line; the queue counts it
                let _ = queue.push(self.line.take_line());
            }
            _ => {
                if self.line.push(byte) {
                    echo.write_byte(byte);
                }
            }
        }
    }

    /// Bytes accumulated toward the next line.
    pub fn pending_len(&self) -> usize {
        self.line.len()
    }
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}
