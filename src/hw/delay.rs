// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SysTick busy-wait delay exposed as `embedded_hal::delay::DelayNs`.
//!
//! The chop pulse trains rely on this spinning rather than yielding, so their timing stays
//! deterministic. An interrupt landing mid-delay only lengthens it.

use cortex_m::{delay::Delay, peripheral::SYST};
use embedded_hal::delay::DelayNs;

pub struct BusyDelay {
    delay: Delay,
}

impl BusyDelay {
    /// `sysclk_hz` is the core clock SysTick counts.
    pub fn new(syst: SYST, sysclk_hz: u32) -> Self {
        Self {
            delay: Delay::new(syst, sysclk_hz),
        }
    }

    pub fn free(self) -> SYST {
        self.delay.free()
    }
}

impl DelayNs for BusyDelay {
    /// Rounded up to whole microseconds.
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_us(ns.div_ceil(1_000));
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
