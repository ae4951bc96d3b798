// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Homing routine.
//!
//! The drum only turns forward, so homing steps clockwise until the home sensor asserts. The
//! status LED is dark for the duration.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::Error;
use crate::hw::{HomeSensor, StatusLed};
use crate::motors::Stepper;

/// Step until the home sensor asserts, returning the number of steps taken.
///
/// Returns immediately with `Ok(0)` if the drum is already home. With `max_steps` set, gives up
/// after that many steps with [`Error::SensorTimeout`] and leaves the LED dark; with `None` it
/// never gives up.
pub fn home<S, H, L>(
    stepper: &mut S,
    sensor: &mut HomeSensor<H>,
    indicator: &mut StatusLed<L>,
    max_steps: Option<u32>,
) -> Result<u32, Error>
where
    S: Stepper,
    H: InputPin,
    L: OutputPin,
{
    indicator.off();

    let mut steps: u32 = 0;
    while !sensor.is_home() {
        if max_steps.is_some_and(|max| steps >= max) {
            return Err(Error::SensorTimeout { steps });
        }
        stepper.step();
        steps = steps.saturating_add(1);
    }

    indicator.on();
    Ok(steps)
}
