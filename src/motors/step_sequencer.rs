// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Clockwise step sequencer.
//!
//! Walks the phase table one entry per step and powers the motor driver only for the duration of
//! each step: both enable lines are asserted before the phase is energized and de-asserted right
//! after, so the bridge sits idle (and cool) between steps.
//!
//! Only clockwise stepping is provided. The flap drum can only be turned forward.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::Stepper;
use crate::drivers::{Phase, PhaseDriver};

pub struct StepSequencer<A1, A2, B1, B2, D, EN1, EN2> {
    driver: PhaseDriver<A1, A2, B1, B2, D>,
    en1: EN1,
    en2: EN2,
    phase: Phase,
    steps: u32,
}

impl<A1, A2, B1, B2, D, EN1, EN2> StepSequencer<A1, A2, B1, B2, D, EN1, EN2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
    D: DelayNs,
    EN1: OutputPin,
    EN2: OutputPin,
{
    /// Create a sequencer at phase 0 with the driver disabled.
    pub fn new(driver: PhaseDriver<A1, A2, B1, B2, D>, en1: EN1, en2: EN2) -> Self {
        let mut seq = Self {
            driver,
            en1,
            en2,
            phase: Phase::default(),
            steps: 0,
        };
        seq.set_enabled(false);
        seq
    }

    /// Drive both enable lines. Pin errors are ignored.
    fn set_enabled(&mut self, on: bool) {
        self.en1.set_state(on.into()).ok();
        self.en2.set_state(on.into()).ok();
    }

    /// Access the underlying phase driver.
    #[inline]
    pub fn driver(&mut self) -> &mut PhaseDriver<A1, A2, B1, B2, D> {
        &mut self.driver
    }

    /// Tear down the sequencer and return its parts.
    pub fn free(self) -> (PhaseDriver<A1, A2, B1, B2, D>, EN1, EN2) {
        (self.driver, self.en1, self.en2)
    }
}

impl<A1, A2, B1, B2, D, EN1, EN2> Stepper for StepSequencer<A1, A2, B1, B2, D, EN1, EN2>
where
    A1: OutputPin,
    A2: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
    D: DelayNs,
    EN1: OutputPin,
    EN2: OutputPin,
{
    fn step(&mut self) {
        self.set_enabled(true);
        self.phase = self.phase.next();
        self.driver.energize(self.phase);
        self.set_enabled(false);
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline]
    fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    fn steps_taken(&self) -> u32 {
        self.steps
    }
}
