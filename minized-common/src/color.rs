// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bicolor LED color states.

use core::fmt;

/// One of the four states of a bicolor (green/red) LED.
///
/// The discriminant is the two-bit LED code: bit 0 drives green, bit 1
/// drives red, both together show amber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    Off = 0b00,
    Green = 0b01,
    Red = 0b10,
    Amber = 0b11,
}

impl Color {
    /// States in cycle order.
    pub const CYCLE: [Color; 4] = [Color::Off, Color::Green, Color::Red, Color::Amber];

    /// State for a given loop counter.
    pub const fn from_counter(counter: u32) -> Self {
        Self::CYCLE[(counter % 4) as usize]
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_green(self) -> bool {
        self.code() & 0b01 != 0
    }

    pub const fn is_red(self) -> bool {
        self.code() & 0b10 != 0
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Off => "Off",
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Amber => "Amber",
        }
    }

    pub const fn next(self) -> Self {
        Self::CYCLE[((self.code() + 1) % 4) as usize]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
