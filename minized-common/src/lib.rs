// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and utilities for the MiniZed blinky examples.
//!
//! The crate is `no_std` so it can be linked into the bare-metal firmware
//! and into host tools alike:
//! - [`regs`]: register access abstraction, real (volatile) and fake
//! - [`bank`]: the Zynq-7000 GPIO banks driving the bicolor LEDs
//! - [`color`] and [`blinky`]: the color cycle and its driver loop
//! - [`platform`]: the board support collaborators, with the MiniZed
//!   implementation in `board` on bare-metal targets

#![no_std]

pub mod bank;
pub mod blinky;
pub mod color;
pub mod platform;
pub mod regs;

#[cfg(target_os = "none")]
pub mod board;

// Re-export commonly used types
pub use bank::{GpioBank, EMIO_BANK, MIO_BANK};
pub use blinky::{run, run_cycles, step, Blinky, Step, Variant, BLINK_PERIOD_MS};
pub use color::Color;
pub use platform::Platform;
pub use regs::{FakeRegisters, Mmio, RegisterBank, RegisterWrite};

#[cfg(target_os = "none")]
pub use board::{BoardError, ZynqPlatform};
