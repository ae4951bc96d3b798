// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 split-flap controller board.
//!
//! | Signal | Pin | Notes |
//! | ------ | --- | ----- |
//! | Coil A1 / A2 / B1 / B2 | PD12 / PD13 / PD14 / PD15 | bridge inputs |
//! | EN1 / EN2 | PA4 / PD2 | bridge enables, active high |
//! | Status LED | PD10 | active high |
//! | Home sensor | PA2 | hall switch, active low, pulled up |
//! | USART1 TX / RX | PA9 / PA10 | debug terminal |
//! | I2C1 SCL / SDA | PB8 / PB9 | bus to the display master |

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, Alternate, OpenDrain},
    pac,
    prelude::*,
};

use super::gpio::{InPin, OutPin};
use crate::drivers::CoilPins;

pub type Coils = CoilPins<OutPin<'D', 12>, OutPin<'D', 13>, OutPin<'D', 14>, OutPin<'D', 15>>;

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub coils: Coils,
    pub en1: OutPin<'A', 4>,
    pub en2: OutPin<'D', 2>,
    pub led: OutPin<'D', 10>,
    pub home: InPin<'A', 2>,
    pub usart1: Usart1Pins,
    pub i2c1: I2c1Pins,
}

// USART1 TX/RX
pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// I2C1 SCL/SDA, open drain. The bus pull-ups are on the display backplane.
pub struct I2c1Pins {
    pub scl: gpiob::PB8<Alternate<4, OpenDrain>>,
    pub sda: gpiob::PB9<Alternate<4, OpenDrain>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals. Every coil and enable line starts low.
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();

        Self {
            coils: CoilPins::new(
                OutPin::new(gpiod.pd12),
                OutPin::new(gpiod.pd13),
                OutPin::new(gpiod.pd14),
                OutPin::new(gpiod.pd15),
            ),

            en1: OutPin::new(gpioa.pa4),
            en2: OutPin::new(gpiod.pd2),

            led: OutPin::new(gpiod.pd10),
            home: InPin::pull_up(gpioa.pa2),

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            i2c1: I2c1Pins {
                scl: gpiob.pb8.into_alternate_open_drain::<4>(),
                sda: gpiob.pb9.into_alternate_open_drain::<4>(),
            },
        }
    }
}
