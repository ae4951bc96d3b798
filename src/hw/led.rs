// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status indicator LED.
//!
//! The indicator is lit while the module knows where its drum is and goes dark for the whole of
//! a homing pass, so a module stuck on a broken sensor stays visibly dark.

use embedded_hal::digital::{OutputPin, PinState};

/// Whether a line is asserted by driving it high or low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    /// Electrical state that represents the logical value `asserted`.
    #[inline]
    pub fn state(self, asserted: bool) -> PinState {
        match (self, asserted) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => PinState::High,
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => PinState::Low,
        }
    }

    /// Logical value of a line read back as `is_high`.
    #[inline]
    pub fn is_asserted(self, is_high: bool) -> bool {
        match self {
            ActiveLevel::High => is_high,
            ActiveLevel::Low => !is_high,
        }
    }
}

/// Status LED that remembers its active level and last commanded state.
pub struct StatusLed<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    lit: bool,
}

impl<PIN: OutputPin> StatusLed<PIN> {
    /// Wrap a pin and drive the LED to `lit`.
    pub fn new(pin: PIN, active: ActiveLevel, lit: bool) -> Self {
        let mut led = Self { pin, active, lit };
        led.set(lit);
        led
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High, false)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low, false)
    }

    /// Light (true) or darken (false) the LED. Pin errors are ignored.
    pub fn set(&mut self, lit: bool) {
        self.pin.set_state(self.active.state(lit)).ok();
        self.lit = lit;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.lit
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
