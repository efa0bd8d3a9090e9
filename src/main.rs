//! UartCalc - firmware entry point.
//!
//! Wires the UART transport to the core: the receive phase drains the
//! RX FIFO into the line assembler, the task phase consumes completed
//! lines from the queue and writes responses.

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

#[cfg(target_os = "espidf")]
mod firmware {
    use esp_idf_svc::sys as esp_idf_sys;

    use esp_idf_svc::hal::delay::NON_BLOCK;
    use esp_idf_svc::hal::gpio;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::uart::{self, UartDriver};
    use esp_idf_svc::hal::units::Hertz;

    use rust_uart_calc::{
        assembler::LineAssembler,
        log_error, log_warn,
        logging::{self, LogStream},
        queue::LineQueue,
        serial::{ByteSink, UartSink},
        shell,
    };

    /// Console UART baud rate.
    const BAUD_RATE: u32 = 115_200;

    /// Dropped-line report interval.
    const DROP_REPORT_PERIOD_US: i64 = 10_000_000;

    /// Pending lines between the receive context and the shell loop.
    static LINE_QUEUE: LineQueue = LineQueue::new();

    /// Diagnostics drained to the UART between input lines.
    static LOG_STREAM: LogStream = LogStream::new();

    #[no_mangle]
    fn main() {
        // Initialize ESP-IDF
        esp_idf_sys::link_patches();

        let peripherals = match Peripherals::take() {
            Ok(p) => p,
            Err(_) => return,
        };

        // UART1 on GPIO17/GPIO18; UART0 stays with the boot console.
        let config = uart::config::Config::default().baudrate(Hertz(BAUD_RATE));
        let uart = match UartDriver::new(
            peripherals.uart1,
            peripherals.pins.gpio17,
            peripherals.pins.gpio18,
            Option::<gpio::AnyIOPin>::None, // CTS
            Option::<gpio::AnyIOPin>::None, // RTS
            &config,
        ) {
            Ok(uart) => uart,
            Err(err) => {
                // Device not ready; no transport to report on, exit cleanly.
                log_error!(LOG_STREAM, 0, "UART init failed: {:?}", err);
                return;
            }
        };

        let (tx, mut rx) = uart.split();
        let mut sink = UartSink::new(tx);
        let mut assembler = LineAssembler::new();

        shell::print_banner(&mut sink);

        let mut fmt_buf = [0u8; 160];
        let mut last_drop_report = timestamp_us();

        loop {
            // Receive phase: read until FIFO empty, one byte at a time.
            let mut byte = [0u8; 1];
            while matches!(rx.read(&mut byte, NON_BLOCK), Ok(1)) {
                assembler.on_byte(byte[0], &LINE_QUEUE, &mut sink);
            }

            // Task phase: consume completed lines.
            let mut work_done = false;
            while let Some(line) = LINE_QUEUE.pop() {
                shell::respond(line.as_str(), &mut sink);
                work_done = true;
            }

            // Drain diagnostics between lines.
            while let Some(entry) = LOG_STREAM.drain() {
                let len = logging::format_entry(&entry, &mut fmt_buf);
                sink.write_bytes(&fmt_buf[..len]);
            }

            // Report dropped lines every 10 seconds
            let now = timestamp_us();
            if now - last_drop_report > DROP_REPORT_PERIOD_US {
                let lost = LINE_QUEUE.dropped();
                if lost > 0 {
                    log_warn!(LOG_STREAM, now, "{} input lines dropped", lost);
                    LINE_QUEUE.reset_dropped();
                }
                last_drop_report = now;
            }

            // If no work, wait before checking again
            if !work_done {
                unsafe {
                    esp_idf_sys::vTaskDelay(1);
                }
            }
        }
    }

    fn timestamp_us() -> i64 {
        unsafe { esp_idf_sys::esp_timer_get_time() }
    }
}

/// Host builds carry no firmware entry; the logic lives in the library.
#[cfg(not(target_os = "espidf"))]
fn main() {}
