// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART debug terminal and the `log` sink that writes to it.
//!
//! Records are written as `[LEVEL] message` lines. Writing is blocking and runs inside a critical
//! section, so nothing should log from the stepping hot path.
//!
//! Note: When using `writeln!` on a bare [`Usart`], be sure to include `\r` (CR) in the format
//! string to ensure correct line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::cell::RefCell;
use core::fmt::{self, Write as _};

use cortex_m::interrupt::{self, Mutex};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use nb::block;
use stm32f7xx_hal::{
    pac,
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}

/// `log` backend writing to USART1.
///
/// Lives in a `static`; the USART is handed over at start-up with [`install`](Self::install).
pub struct UsartLogger {
    usart: Mutex<RefCell<Option<Usart<pac::USART1>>>>,
}

impl UsartLogger {
    pub const fn new() -> Self {
        Self {
            usart: Mutex::new(RefCell::new(None)),
        }
    }

    /// Take ownership of `usart` and register as the global logger.
    pub fn install(
        &'static self,
        usart: Usart<pac::USART1>,
        level: LevelFilter,
    ) -> Result<(), SetLoggerError> {
        interrupt::free(|cs| self.usart.borrow(cs).replace(Some(usart)));
        log::set_logger(self)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Default for UsartLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for UsartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        interrupt::free(|cs| {
            if let Some(usart) = self.usart.borrow(cs).borrow_mut().as_mut() {
                let _ = write!(usart, "[{}] {}\r\n", record.level(), record.args());
            }
        });
    }

    fn flush(&self) {
        interrupt::free(|cs| {
            if let Some(usart) = self.usart.borrow(cs).borrow_mut().as_mut() {
                usart.flush();
            }
        });
    }
}
