// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Split-Flap Module Firmware
//!
//! This crate drives one split-flap display module: a four-phase stepper motor that turns the
//! flap drum, a magnetic home sensor that marks flap zero, and a status LED. The module is a slave
//! on a two-wire bus and is told which flap to show with single-byte writes.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Pin-level wrappers (status LED, home sensor) and, with `firmware`, STM32F7 glue |
//! | [`drivers`] | Coil phase driver with chopped-current pulse trains |
//! | [`motors`] | Step sequencer bracketing every step with the driver enable lines |
//! | [`control`] | Homing routine and absolute position controller |
//! | [`protocol`] | Bus byte decoding and the latest-command slot |
//!
//! Everything outside `hw`'s board modules is generic over `embedded-hal` 1.0 traits and builds
//! for the host, which is how the tests run.
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod control;
pub mod drivers;
pub mod error;
pub mod hw;
pub mod motors;
pub mod protocol;

pub use error::Error;
