// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Phase driver for the four coil lines of a bipolar stepper.
//!
//! A phase is held by chopping its coil pair on and off for a fixed number of cycles instead of
//! holding it on, which keeps the average coil current (and heating) down while the rotor settles.
//! The chop train is a busy-wait on the supplied delay, so `energize` blocks for
//! [`ChopTiming::pulse_duration_us`].

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::phase::{Coil, Phase};

/// Chopped-current pulse train applied to every phase.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChopTiming {
    /// Coil pair on-time per cycle, in microseconds.
    pub on_us: u32,
    /// Coil pair off-time per cycle, in microseconds.
    pub off_us: u32,
    /// Number of on/off cycles per phase.
    pub cycles: u32,
}

impl ChopTiming {
    pub const fn new(on_us: u32, off_us: u32, cycles: u32) -> Self {
        Self {
            on_us,
            off_us,
            cycles,
        }
    }

    /// Length of one on/off cycle.
    #[inline]
    pub const fn period_us(&self) -> u32 {
        self.on_us + self.off_us
    }

    /// Time spent inside one `energize` call.
    #[inline]
    pub const fn pulse_duration_us(&self) -> u32 {
        self.period_us() * self.cycles
    }
}

impl Default for ChopTiming {
    fn default() -> Self {
        Self::new(50, 10, 125)
    }
}

/// The four coil control lines.
pub struct CoilPins<A1, A2, B1, B2> {
    pub a1: A1,
    pub a2: A2,
    pub b1: B1,
    pub b2: B2,
}

impl<A1, A2, B1, B2> CoilPins<A1, A2, B1, B2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
{
    pub fn new(a1: A1, a2: A2, b1: B1, b2: B2) -> Self {
        Self { a1, a2, b1, b2 }
    }

    /// Drive one coil line. Pin errors are ignored.
    pub fn set(&mut self, coil: Coil, on: bool) {
        match coil {
            Coil::A1 => self.a1.set_state(on.into()).ok(),
            Coil::A2 => self.a2.set_state(on.into()).ok(),
            Coil::B1 => self.b1.set_state(on.into()).ok(),
            Coil::B2 => self.b2.set_state(on.into()).ok(),
        };
    }

    /// Drive both coils of `phase`'s pair.
    #[inline]
    fn set_pair(&mut self, phase: Phase, on: bool) {
        let (first, second) = phase.pair();
        self.set(first, on);
        self.set(second, on);
    }
}

/// Drives one phase at a time onto the coil lines.
pub struct PhaseDriver<A1, A2, B1, B2, D> {
    coils: CoilPins<A1, A2, B1, B2>,
    delay: D,
    timing: ChopTiming,
}

impl<A1, A2, B1, B2, D> PhaseDriver<A1, A2, B1, B2, D>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
    D: DelayNs,
{
    /// Create a driver and release all coils.
    pub fn new(coils: CoilPins<A1, A2, B1, B2>, delay: D, timing: ChopTiming) -> Self {
        let mut driver = Self {
            coils,
            delay,
            timing,
        };
        driver.release();
        driver
    }

    /// Energize `phase` with one chop train.
    ///
    /// The two coils outside the pair are cleared before the pair is asserted, so an opposing
    /// winding is never driven together with this phase. All coils are off on return.
    pub fn energize(&mut self, phase: Phase) {
        for coil in Coil::ALL {
            if !phase.drives(coil) {
                self.coils.set(coil, false);
            }
        }
        self.coils.set_pair(phase, true);

        for _ in 0..self.timing.cycles {
            self.coils.set_pair(phase, true);
            self.delay.delay_us(self.timing.on_us);
            self.coils.set_pair(phase, false);
            self.delay.delay_us(self.timing.off_us);
        }
    }

    /// De-energize every coil.
    pub fn release(&mut self) {
        for coil in Coil::ALL {
            self.coils.set(coil, false);
        }
    }

    #[inline]
    pub fn timing(&self) -> ChopTiming {
        self.timing
    }

    /// Tear down the driver and return its pins and delay.
    pub fn free(self) -> (CoilPins<A1, A2, B1, B2>, D) {
        (self.coils, self.delay)
    }
}
