// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Zynq-7000 GPIO banks wired to the MiniZed bicolor LEDs.
//!
//! Both Data registers are maskable-data halfword registers: the upper 16
//! bits are a write mask (0 = pin is updated) and the lower 16 bits carry
//! the pin levels. The LED pins are the only unmasked ones, so writing the
//! literal values below leaves every other pin of the bank untouched.
//!
//! | Bank | LED pins             | Data                   | Direction | Output-Enable |
//! |------|----------------------|------------------------|-----------|---------------|
//! | MIO  | MIO52 (red), MIO53 (green)  | `MASK_DATA_1_MSW` | `DIRM_1` | `OEN_1`  |
//! | EMIO | EMIO54 (green), EMIO55 (red) | `MASK_DATA_2_LSW` | `DIRM_2` | -       |

use crate::color::Color;
use crate::regs::{RegisterBank, RegisterWrite};

/// Base address of the PS GPIO controller.
pub const GPIO_BASE: u32 = 0xE000_A000;

pub const MASK_DATA_1_MSW: u32 = GPIO_BASE + 0x00C;
pub const MASK_DATA_2_LSW: u32 = GPIO_BASE + 0x048;
pub const DIRM_1: u32 = GPIO_BASE + 0x244;
pub const OEN_1: u32 = GPIO_BASE + 0x248;
pub const DIRM_2: u32 = GPIO_BASE + 0x284;

/// Register layout and LED wiring of one GPIO bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioBank {
    pub name: &'static str,
    /// Data register address.
    pub data: u32,
    /// Direction register address.
    pub direction: u32,
    /// Output-Enable register address, if the bank needs one.
    pub output_enable: Option<u32>,
    /// Bits always written to the Data register (write mask halfword).
    pub preserved: u32,
    /// Value written to Direction and Output-Enable.
    pub output_pins: u32,
    pub green: u32,
    pub red: u32,
}

/// Processor-side bank driving the PS bicolor LED.
pub const MIO_BANK: GpioBank = GpioBank {
    name: "MIO",
    data: MASK_DATA_1_MSW,
    direction: DIRM_1,
    output_enable: Some(OEN_1),
    preserved: 0xFFCF_0000,
    output_pins: 0x0030_0000,
    green: 1 << 5,
    red: 1 << 4,
};

/// PL-routed bank driving the PL bicolor LED.
pub const EMIO_BANK: GpioBank = GpioBank {
    name: "EMIO",
    data: MASK_DATA_2_LSW,
    direction: DIRM_2,
    output_enable: None,
    preserved: 0xFFFC_0000,
    output_pins: 0x0000_0003,
    green: 1 << 0,
    red: 1 << 1,
};

impl GpioBank {
    /// Data register value showing `color`.
    pub const fn data_value(&self, color: Color) -> u32 {
        let mut value = self.preserved;
        if color.is_green() {
            value |= self.green;
        }
        if color.is_red() {
            value |= self.red;
        }
        value
    }

    /// Data register write showing `color`.
    pub const fn data_write(&self, color: Color) -> RegisterWrite {
        RegisterWrite::new(self.data, self.data_value(color))
    }

    /// Drive the LED pins low and make them outputs.
    ///
    /// Plain writes only: the result does not depend on what the registers
    /// held before.
    pub fn configure(&self, regs: &mut impl RegisterBank) {
        regs.write(self.data, self.data_value(Color::Off));
        regs.write(self.direction, self.output_pins);
        if let Some(oen) = self.output_enable {
            regs.write(oen, self.output_pins);
        }
    }
}
