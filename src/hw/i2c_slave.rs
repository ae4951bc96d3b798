// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-wire bus slave on I2C1, by direct PAC register access.
//!
//! The module only receives: every byte the master writes is published into a
//! [`CommandSlot`] from the event interrupt. Master reads get `0x00` filler bytes. Bus errors are
//! cleared and otherwise ignored, the master retries.
//!
//! Example:
//! ```ignore
//! static SLOT: CommandSlot = CommandSlot::new();
//!
//! let mut i2c = I2cSlave::new(dp.I2C1, SLAVE_ADDRESS);
//! i2c.listen();
//!
//! #[interrupt]
//! fn I2C1_EV() {
//!     I2cSlave::on_event(&SLOT);
//! }
//! ```

use cortex_m::peripheral::NVIC;
use stm32f7xx_hal::pac::{self, I2C1};

use crate::protocol::CommandSlot;

// CR1
const CR1_PE: u32 = 1 << 0;
const CR1_TXIE: u32 = 1 << 1;
const CR1_RXIE: u32 = 1 << 2;
const CR1_ADDRIE: u32 = 1 << 3;
const CR1_NACKIE: u32 = 1 << 4;
const CR1_STOPIE: u32 = 1 << 5;
const CR1_ERRIE: u32 = 1 << 7;

// OAR1
const OAR1_OA1EN: u32 = 1 << 15;

// ISR (ICR clear bits share the positions)
const ISR_TXE: u32 = 1 << 0;
const ISR_TXIS: u32 = 1 << 1;
const ISR_RXNE: u32 = 1 << 2;
const ISR_ADDR: u32 = 1 << 3;
const ISR_NACKF: u32 = 1 << 4;
const ISR_STOPF: u32 = 1 << 5;
const ISR_BERR: u32 = 1 << 8;
const ISR_ARLO: u32 = 1 << 9;
const ISR_OVR: u32 = 1 << 10;
const ISR_DIR: u32 = 1 << 16;

const ISR_ERRORS: u32 = ISR_BERR | ISR_ARLO | ISR_OVR;

/// 100 kHz standard mode, 16 MHz kernel clock (PCLK1 at reset clocks). Only the SDADEL/SCLDEL
/// fields matter in slave mode.
const TIMINGR_100K_16MHZ: u32 = 0x0030_3D5B;

pub struct I2cSlave {
    i2c: I2C1,
}

impl I2cSlave {
    /// Enable and reset I2C1, then configure it as a slave at 7-bit `address`.
    pub fn new(i2c: I2C1, address: u8) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.i2c1en().set_bit());
        rcc.apb1rstr.modify(|_, w| w.i2c1rst().set_bit());
        rcc.apb1rstr.modify(|_, w| w.i2c1rst().clear_bit());

        // Peripheral must be disabled while timing and own address are written
        i2c.cr1.write(|w| unsafe { w.bits(0) });
        i2c.timingr.write(|w| unsafe { w.bits(TIMINGR_100K_16MHZ) });
        i2c.oar1.write(|w| unsafe { w.bits(0) });
        i2c.oar1
            .write(|w| unsafe { w.bits(OAR1_OA1EN | (u32::from(address & 0x7F) << 1)) });

        i2c.cr1.write(|w| unsafe {
            w.bits(CR1_PE | CR1_TXIE | CR1_RXIE | CR1_ADDRIE | CR1_NACKIE | CR1_STOPIE | CR1_ERRIE)
        });

        Self { i2c }
    }

    /// Unmask the I2C1 event and error interrupts.
    pub fn listen(&mut self) {
        unsafe {
            NVIC::unmask(pac::Interrupt::I2C1_EV);
            NVIC::unmask(pac::Interrupt::I2C1_ER);
        }
    }

    /// Service an I2C1 event interrupt. Call from the `I2C1_EV` handler.
    pub fn on_event(slot: &CommandSlot) {
        let i2c = unsafe { &*I2C1::ptr() };
        let isr = i2c.isr.read().bits();

        if isr & ISR_ADDR != 0 {
            if isr & ISR_DIR != 0 {
                // Master read: drop any stale transmit byte
                i2c.isr.write(|w| unsafe { w.bits(ISR_TXE) });
            }
            i2c.icr.write(|w| unsafe { w.bits(ISR_ADDR) });
        }

        if isr & ISR_RXNE != 0 {
            let byte = i2c.rxdr.read().bits() as u8;
            // Overwrites are counted by the slot and reported by the control loop
            let _ = slot.publish(byte);
        }

        if isr & ISR_TXIS != 0 {
            i2c.txdr.write(|w| unsafe { w.bits(0x00) });
        }

        if isr & ISR_NACKF != 0 {
            i2c.icr.write(|w| unsafe { w.bits(ISR_NACKF) });
        }

        if isr & ISR_STOPF != 0 {
            i2c.icr.write(|w| unsafe { w.bits(ISR_STOPF) });
        }
    }

    /// Clear latched bus errors. Call from the `I2C1_ER` handler.
    pub fn on_error() {
        let i2c = unsafe { &*I2C1::ptr() };
        let isr = i2c.isr.read().bits();
        if isr & ISR_ERRORS != 0 {
            i2c.icr.write(|w| unsafe { w.bits(isr & ISR_ERRORS) });
        }
    }

    /// Disable the peripheral and return it.
    pub fn free(self) -> I2C1 {
        self.i2c.cr1.write(|w| unsafe { w.bits(0) });
        self.i2c
    }
}
