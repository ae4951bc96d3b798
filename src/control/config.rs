// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Controller configuration.

/// Motor steps per flap on the reference drum gearing.
pub const DEFAULT_STEP_OFFSET: u16 = 5;

/// Homing step budget. A full drum turn is 255 steps on the reference gearing, so this allows
/// eight turns before the sensor is declared dead.
pub const DEFAULT_MAX_HOMING_STEPS: u32 = 2040;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ControllerConfig {
    /// Motor steps per commanded position unit.
    pub step_offset: u16,
    /// Give up homing after this many steps. `None` steps until the sensor asserts.
    pub max_homing_steps: Option<u32>,
}

impl ControllerConfig {
    pub const fn new() -> Self {
        Self {
            step_offset: DEFAULT_STEP_OFFSET,
            max_homing_steps: Some(DEFAULT_MAX_HOMING_STEPS),
        }
    }

    /// Set the steps per position unit.
    pub const fn with_step_offset(mut self, step_offset: u16) -> Self {
        self.step_offset = step_offset;
        self
    }

    /// Set the homing step budget.
    pub const fn with_max_homing_steps(mut self, max: Option<u32>) -> Self {
        self.max_homing_steps = max;
        self
    }

    /// Motor steps needed to advance `units` positions.
    #[inline]
    pub const fn steps_for(&self, units: u8) -> u32 {
        units as u32 * self.step_offset as u32
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
