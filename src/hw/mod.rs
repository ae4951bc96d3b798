// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Layer
//!
//! Pin-level wrappers used by the control code. [`led`] and [`sensor`] only depend on
//! `embedded-hal` traits. The remaining modules bind those traits to the STM32F7 peripherals and
//! are only built with the `firmware` feature.

pub mod led;
pub mod sensor;

#[cfg(feature = "firmware")]
pub mod delay;
#[cfg(feature = "firmware")]
pub mod gpio;
#[cfg(feature = "firmware")]
pub mod i2c_slave;
#[cfg(feature = "firmware")]
pub mod pins;
#[cfg(feature = "firmware")]
pub mod usart;

pub use led::{ActiveLevel, StatusLed};
pub use sensor::HomeSensor;

#[cfg(feature = "firmware")]
pub use delay::BusyDelay;
#[cfg(feature = "firmware")]
pub use gpio::{InPin, OutPin};
#[cfg(feature = "firmware")]
pub use i2c_slave::I2cSlave;
#[cfg(feature = "firmware")]
pub use usart::{Usart, UsartLogger};
