// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Absolute position controller for the flap drum.
//!
//! Owns the motor, the home sensor and the status LED, and keeps the authoritative drum position
//! in flap units. Each received bus byte is evaluated once:
//!
//! | Byte | Position | Action |
//! | ---- | -------- | ------ |
//! | `> HOMING_THRESHOLD` | any | home, position = 0 |
//! | target | unknown | home, position = 0 |
//! | target | `> target` | home, position = 0, no stepping this cycle |
//! | target | `== target` | nothing |
//! | target | `< target` | step `(target - position) * step_offset`, position = target |
//!
//! After a regression the display waits at home; the target is only reached if the bus master
//! sends it again.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! static SLOT: CommandSlot = CommandSlot::new();
//!
//! let mut controller = MotorController::new(stepper, sensor, led, ControllerConfig::default());
//! controller.run(&SLOT);
//! ```

use embedded_hal::digital::{InputPin, OutputPin};
use log::{debug, error, info, warn};

use super::{config::ControllerConfig, homing};
use crate::drivers::Phase;
use crate::error::Error;
use crate::hw::{HomeSensor, StatusLed};
use crate::motors::Stepper;
use crate::protocol::{Command, CommandSlot};

/// What one evaluation of a bus byte did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Nothing received, or already at the target.
    Idle,
    /// Homed on request.
    Homed { steps: u32 },
    /// Homed because the target was behind the drum (or the position was unknown).
    Regressed {
        from: Option<u8>,
        target: u8,
        steps: u32,
    },
    /// Stepped forward to the target.
    Moved { from: u8, to: u8, steps: u32 },
}

pub struct MotorController<S, H, L>
where
    S: Stepper,
    H: InputPin,
    L: OutputPin,
{
    stepper: S,
    sensor: HomeSensor<H>,
    status: StatusLed<L>,
    config: ControllerConfig,

    /// Flap the drum is showing. `None` until the first homing succeeds.
    position: Option<u8>,
}

impl<S, H, L> MotorController<S, H, L>
where
    S: Stepper,
    H: InputPin,
    L: OutputPin,
{
    pub fn new(
        stepper: S,
        sensor: HomeSensor<H>,
        status: StatusLed<L>,
        config: ControllerConfig,
    ) -> Self {
        Self {
            stepper,
            sensor,
            status,
            config,
            position: None,
        }
    }

    /// Start-up homing pass. Must run before the first command is applied.
    pub fn start(&mut self) -> Result<u32, Error> {
        info!("homing at start-up");
        self.home()
    }

    /// Run the homing routine and zero the position on success.
    ///
    /// The position is unknown while homing and stays unknown if homing fails.
    pub fn home(&mut self) -> Result<u32, Error> {
        self.position = None;
        match homing::home(
            &mut self.stepper,
            &mut self.sensor,
            &mut self.status,
            self.config.max_homing_steps,
        ) {
            Ok(steps) => {
                self.position = Some(0);
                info!("homed after {} steps", steps);
                Ok(steps)
            }
            Err(e) => {
                error!("homing failed: {}", e);
                Err(e)
            }
        }
    }

    /// Evaluate one received bus byte.
    pub fn apply(&mut self, byte: u8) -> Result<Action, Error> {
        let target = match Command::from_byte(byte) {
            Command::Home => {
                let steps = self.home()?;
                return Ok(Action::Homed { steps });
            }
            Command::MoveTo(target) => target,
        };

        match self.position {
            Some(from) if target == from => {
                debug!("already at {}", target);
                Ok(Action::Idle)
            }
            Some(from) if target > from => {
                let steps = self.config.steps_for(target - from);
                for _ in 0..steps {
                    self.stepper.step();
                }
                self.position = Some(target);
                debug!("moved {} -> {} in {} steps", from, target, steps);
                Ok(Action::Moved {
                    from,
                    to: target,
                    steps,
                })
            }
            from => {
                debug!("target {} is behind {:?}, rehoming", target, from);
                let steps = self.home()?;
                Ok(Action::Regressed {
                    from,
                    target,
                    steps,
                })
            }
        }
    }

    /// One control loop iteration: consume the latest bus byte and act on it.
    pub fn poll(&mut self, slot: &CommandSlot) -> Result<Action, Error> {
        let overruns = slot.take_overruns();
        if overruns > 0 {
            warn!("{} bus byte(s) overwritten before being read", overruns);
        }

        match slot.take() {
            Some(byte) => self.apply(byte),
            None => Ok(Action::Idle),
        }
    }

    /// Home once, then serve `slot` forever.
    ///
    /// Errors are logged by the failing operation and the loop carries on. A failed homing leaves
    /// the position unknown, so the next position byte (or a homing command) retries it.
    pub fn run(&mut self, slot: &CommandSlot) -> ! {
        let _ = self.start();
        loop {
            let _ = self.poll(slot);
        }
    }

    /// Current drum position, `None` if not homed.
    #[inline]
    pub fn position(&self) -> Option<u8> {
        self.position
    }

    #[inline]
    pub fn is_homed(&self) -> bool {
        self.position.is_some()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.stepper.phase()
    }

    #[inline]
    pub fn steps_taken(&self) -> u32 {
        self.stepper.steps_taken()
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Status LED state.
    #[inline]
    pub fn status_lit(&self) -> bool {
        self.status.is_on()
    }

    /// Tear down the controller and return its parts.
    pub fn free(self) -> (S, HomeSensor<H>, StatusLed<L>) {
        (self.stepper, self.sensor, self.status)
    }
}
