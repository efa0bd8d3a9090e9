//! Serial output sink abstraction and ESP-IDF UART backing.
//!
//! The core only needs a blocking single-byte transmit; everything else
//! (echo, responses, log drain) is built on top of [`ByteSink`].

/// Blocking single-byte transmit sink.
pub trait ByteSink {
    /// Transmit one byte. Synchronous; returns when the byte is accepted.
    fn write_byte(&mut self, byte: u8);

    /// Transmit a byte slice, one byte at a time.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }

    /// Transmit a string, one byte at a time.
    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Transmit a string followed by carriage-return + line-feed.
    fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }
}

/// `core::fmt::Write` adapter over a byte sink, for formatted output.
pub struct SinkWriter<'a>(pub &'a mut dyn ByteSink);

impl core::fmt::Write for SinkWriter<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}

/// UART-backed sink for device builds.
#[cfg(target_os = "espidf")]
pub struct UartSink<'d> {
    tx: esp_idf_svc::hal::uart::UartTxDriver<'d>,
}

#[cfg(target_os = "espidf")]
impl<'d> UartSink<'d> {
    /// Wrap a configured UART transmit driver.
    pub fn new(tx: esp_idf_svc::hal::uart::UartTxDriver<'d>) -> Self {
        Self { tx }
    }
}

#[cfg(target_os = "espidf")]
impl ByteSink for UartSink<'_> {
    fn write_byte(&mut self, byte: u8) {
        // Output is a dumb sink; a failed write has nowhere to be reported.
        let _ = self.tx.write(&[byte]);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let _ = self.tx.write(bytes);
    }
}
