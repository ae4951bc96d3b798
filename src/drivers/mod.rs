// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains the coil-level driver for the module's bipolar stepper. It sits above the
//! `embedded-hal` pins and below the step sequencer in `motors`.
//!
//! ## Existing drivers
//!
//! - [`phase`] – coil names and the four-state phase table
//! - [`phase_driver`] – energizes one phase with a chopped-current pulse train

pub mod phase;
pub mod phase_driver;

pub use phase::{Coil, Phase};
pub use phase_driver::{ChopTiming, CoilPins, PhaseDriver};
