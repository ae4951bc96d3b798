// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control
//!
//! Position keeping for the flap drum.
//!
//! ## Modules
//!
//! - [`config`] - Gearing and homing limits.
//! - [`homing`] - Step until the home sensor asserts.
//! - [`motor_controller`] - Absolute position controller driven by bus bytes.

pub mod config;
pub mod homing;
pub mod motor_controller;

pub use config::ControllerConfig;
pub use homing::home;
pub use motor_controller::{Action, MotorController};
