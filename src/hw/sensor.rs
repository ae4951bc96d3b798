// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Magnetic home sensor.
//!
//! The reference module uses a hall switch that pulls its line low while the drum magnet is in
//! front of it, so the default wiring is [`ActiveLevel::Low`].

use embedded_hal::digital::InputPin;

use super::led::ActiveLevel;

pub struct HomeSensor<PIN: InputPin> {
    pin: PIN,
    active: ActiveLevel,
}

impl<PIN: InputPin> HomeSensor<PIN> {
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// True while the drum sits at its home position.
    ///
    /// A failed read counts as "not home", so homing keeps stepping (and eventually times out)
    /// rather than zeroing on a bad reading.
    pub fn is_home(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => self.active.is_asserted(high),
            Err(_) => false,
        }
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
