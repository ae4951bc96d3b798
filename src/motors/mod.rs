// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! This module contains motor-level wrappers that sit above the coil driver in `drivers`.
//!
//! ## Modules
//!
//! - [`step_sequencer`] - Clockwise full-step sequencer built on `PhaseDriver`.

pub mod step_sequencer;

pub use step_sequencer::StepSequencer;

use crate::drivers::Phase;

/// A motor that can be advanced one full step clockwise.
///
/// This is the seam between the position controller and the coil hardware.
pub trait Stepper {
    /// Advance one step clockwise. Blocks until the step's pulse train has finished.
    fn step(&mut self);

    /// Phase latched by the most recent step.
    fn phase(&self) -> Phase;

    /// Steps issued since power-on, wrapping.
    fn steps_taken(&self) -> u32;
}
